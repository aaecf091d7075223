use super::{REPORT_TITLE, Report, Section};

pub fn render(report: &Report) -> String {
    let mut md = String::with_capacity(4096);
    md.push_str(&format!("# {}\n", REPORT_TITLE));

    for section in &report.sections {
        md.push('\n');
        render_section(&mut md, section);
    }

    md
}

fn render_section(md: &mut String, section: &Section) {
    md.push_str(&format!("## {}\n\n", section.title));

    md.push('|');
    for header in section.headers {
        md.push_str(&format!(" {} |", header));
    }
    md.push('\n');

    md.push('|');
    for header in section.headers {
        md.push_str(&"-".repeat(header.len() + 2));
        md.push('|');
    }
    md.push('\n');

    for row in &section.rows {
        md.push('|');
        for cell in row {
            md.push_str(&format!(" {} |", escape(cell)));
        }
        md.push('\n');
    }
}

/// Keep a literal `|` from splitting the cell.
fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_table_with_header_and_separator() {
        let report = Report {
            sections: vec![Section {
                title: "Failed Libraries",
                headers: &["Library", "Path"],
                rows: vec![vec!["zlib".to_string(), "/src/zlib".to_string()]],
            }],
        };

        let md = render(&report);
        assert_eq!(
            md,
            "# Dependency Report\n\
             \n\
             ## Failed Libraries\n\
             \n\
             | Library | Path |\n\
             |---------|------|\n\
             | zlib | /src/zlib |\n"
        );
    }

    #[test]
    fn pipes_in_cells_are_escaped() {
        assert_eq!(escape("a|b"), "a\\|b");
    }
}
