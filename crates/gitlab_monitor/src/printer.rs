//! Human-readable output for DTOs.
//!
//! Used by the `--no-database` flows: instead of persisting, records are
//! written to stdout as labeled blocks under a banner.

use crate::dto::{CommitDto, ProjectDto};

const SEPARATOR_WIDTH: usize = 75;

/// Pretty printing for one DTO kind.
///
/// The associated type makes handing the wrong DTO kind to a printer a
/// compile error rather than a runtime check.
pub trait PrettyPrint {
    type Dto;

    /// Banner printed above a list.
    fn banner(&self) -> &'static str;

    /// Format one record as labeled lines.
    fn format_dto(&self, dto: &Self::Dto) -> String;

    /// Format a whole list: banner, then each record with its position and
    /// a separator line.
    fn format_dto_list(&self, dtos: &[Self::Dto]) -> String {
        let mut out = String::new();
        out.push_str(self.banner());
        out.push('\n');
        for (index, dto) in dtos.iter().enumerate() {
            out.push_str(&format!("#{}\n", index + 1));
            out.push_str(&self.format_dto(dto));
            out.push('\n');
            out.push_str(&"-".repeat(SEPARATOR_WIDTH));
            out.push('\n');
        }
        out
    }

    fn print_dto(&self, dto: &Self::Dto) {
        println!("{}", self.format_dto(dto));
    }

    fn print_dto_list(&self, dtos: &[Self::Dto]) {
        print!("{}", self.format_dto_list(dtos));
    }
}

/// Printer for project records.
pub struct ProjectPrinter;

impl PrettyPrint for ProjectPrinter {
    type Dto = ProjectDto;

    fn banner(&self) -> &'static str {
        "=== GitLab projects ==="
    }

    fn format_dto(&self, dto: &ProjectDto) -> String {
        format!(
            "Id: {}\nName: {}\nPath: {}\nDescription: {}\nRelease: {}\nVisibility: {}\nCreated at: {}\nUpdated at: {}",
            dto.project_id,
            dto.name,
            dto.path,
            dto.description.as_deref().unwrap_or("None"),
            dto.release.as_deref().unwrap_or("None"),
            dto.visibility,
            dto.created_at.to_rfc3339(),
            dto.updated_at.to_rfc3339(),
        )
    }
}

/// Printer for commit records.
pub struct CommitPrinter;

impl PrettyPrint for CommitPrinter {
    type Dto = CommitDto;

    fn banner(&self) -> &'static str {
        "=== GitLab commits ==="
    }

    fn format_dto(&self, dto: &CommitDto) -> String {
        format!(
            "Id: {}\nProject id: {}\nMessage: {}\nDate: {}\nAuthor: {}",
            dto.commit_id,
            dto.project_id,
            dto.message,
            dto.date.to_rfc3339(),
            dto.author,
        )
    }
}
