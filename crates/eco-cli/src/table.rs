use console::style;
use eco_core::Profile;

const HEADERS: [&str; 5] = ["ID", "Name", "Description", "IP", "PEM File Path"];

/// Render profiles as a box-drawn table, headers in blue bold, every
/// column left-aligned and fitted to its widest cell. Ends with a
/// newline.
pub(crate) fn render(profiles: &[Profile]) -> String {
    let rows: Vec<[String; 5]> = profiles
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.description.clone(),
                p.ip.clone(),
                p.pem_file_path.display().to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    border(&mut out, &widths, '┌', '┬', '┐');
    out.push('│');
    for (i, header) in HEADERS.iter().enumerate() {
        // Pad before styling so ANSI codes don't count toward the width.
        let cell = format!(" {:<width$} ", header, width = widths[i]);
        out.push_str(&style(cell).blue().bold().to_string());
        out.push('│');
    }
    out.push('\n');
    border(&mut out, &widths, '├', '┼', '┤');
    for row in &rows {
        out.push('│');
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!(" {:<width$} ", cell, width = widths[i]));
            out.push('│');
        }
        out.push('\n');
    }
    border(&mut out, &widths, '└', '┴', '┘');
    out
}

fn border(out: &mut String, widths: &[usize; 5], left: char, mid: char, right: char) {
    out.push(left);
    for (i, w) in widths.iter().enumerate() {
        out.push_str(&"─".repeat(w + 2));
        if i < widths.len() - 1 {
            out.push(mid);
        }
    }
    out.push(right);
    out.push('\n');
}
