use crate::config::OutputConfig;
use crate::constants::DEFAULT_LINE_NUMBER_WIDTH;
use crate::core_types::FileInfo;
use crate::output::formatter::display_path;
use std::io::{self, Write};

/// Writes a single file's header and content block to the writer.
pub fn write_file_block(
    writer: &mut dyn Write,
    file_info: &FileInfo,
    opts: &OutputConfig,
) -> io::Result<()> {
    writeln!(writer, "## File: {}", display_path(file_info, opts))?;

    let extension_hint = file_info
        .relative_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    writeln!(writer, "```{}", extension_hint)?;

    match &file_info.processed_content {
        Some(content) => {
            let lines: Vec<&str> = content.lines().collect();
            let num_width = line_number_width(lines.len());
            for (i, line) in lines.iter().enumerate() {
                if opts.line_numbers {
                    write!(writer, "{:>width$} | ", i + 1, width = num_width)?;
                }
                writeln!(writer, "{}", line)?;
            }
        }
        None => {
            log::warn!(
                "Content not available for file: {}",
                file_info.absolute_path.display()
            );
            writeln!(writer, "// Content not available")?;
        }
    }

    writeln!(writer, "```")
}

/// Digits needed for the largest line number, never less than the default width.
fn line_number_width(line_count: usize) -> usize {
    line_count
        .to_string()
        .len()
        .max(DEFAULT_LINE_NUMBER_WIDTH)
}
