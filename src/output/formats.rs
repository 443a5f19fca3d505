// src/output/formats.rs

use crate::registry::TypeRegistry;
use std::io::{self, Write};

/// Prints the registered types grouped by processing path, extensions sorted.
pub fn write_format_list(registry: &TypeRegistry, writer: &mut dyn Write) -> io::Result<()> {
    let width = registry
        .iter()
        .map(|(ext, _)| ext.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(writer, "Supported File Formats")?;
    for path in registry.processing_paths() {
        let label = path.as_str();
        let mut heading = label.chars();
        let heading: String = heading
            .next()
            .map(|first| first.to_uppercase().chain(heading).collect())
            .unwrap_or_default();
        writeln!(writer, "\n{}:", heading)?;
        for (extension, descriptor) in registry.iter() {
            if descriptor.path == path {
                writeln!(
                    writer,
                    "  {:<width$}  {} {}",
                    extension,
                    descriptor.icon,
                    descriptor.name,
                    width = width
                )?;
            }
        }
    }
    writeln!(writer, "\nTotal: {} supported formats", registry.len())?;
    writeln!(
        writer,
        "Use --format to override detection for non-standard extensions, e.g. `docpage pipeline.slp --format json`"
    )?;
    Ok(())
}
