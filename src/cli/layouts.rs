use anyhow::Result;

#[cfg(feature = "colorized_output")]
use console::style;

use benchplot::layout::LayoutTable;

use super::Config;

/// List the active column offset table
pub fn run(config: &Config) -> Result<()> {
    let table = config.layout_table()?;
    print!("{}", format_table(&table));
    Ok(())
}

fn format_table(table: &LayoutTable) -> String {
    let mut output = String::new();

    let title = format!("Column Offset Table (version {})", table.version());
    #[cfg(feature = "colorized_output")]
    {
        output.push_str(&format!("{}\n", style(&title).bold().cyan()));
        output.push_str(&format!("{}\n\n", style("=".repeat(title.len())).cyan()));
    }
    #[cfg(not(feature = "colorized_output"))]
    {
        output.push_str(&format!("{}\n{}\n\n", title, "=".repeat(title.len())));
    }

    for (key, layout) in table.iter() {
        output.push_str(&format!(
            "{}  prefix '{}', min {} columns\n",
            key,
            layout.prefix(),
            layout.required_columns()
        ));
        for field in layout.fields() {
            output.push_str(&format!(
                "  {:>3}  {:<16} {:?}\n",
                field.column, field.name, field.kind
            ));
        }
        for marker in layout.markers() {
            output.push_str(&format!("  {:>3}  = '{}'\n", marker.column, marker.token));
        }
    }

    output
}
