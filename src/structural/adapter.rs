// Adapter: let a type with an incompatible interface stand in where another is expected.

use std::io::Write;

use crate::error::Result;

/// The interface client code was written against.
pub trait Printer {
    fn print(&self, text: &str, out: &mut dyn Write) -> Result<()>;
}

pub struct OldPrinter;

impl Printer for OldPrinter {
    fn print(&self, text: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing: {}", text)?;
        Ok(())
    }
}

/// Newer device with a different method name.
pub struct NewPrinter;

impl NewPrinter {
    pub fn print_document(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing document: {}", document)?;
        Ok(())
    }
}

pub struct PrinterAdapter {
    new_printer: NewPrinter,
}

impl PrinterAdapter {
    pub fn new(new_printer: NewPrinter) -> Self {
        Self { new_printer }
    }
}

impl Printer for PrinterAdapter {
    fn print(&self, text: &str, out: &mut dyn Write) -> Result<()> {
        self.new_printer.print_document(text, out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let printers: [Box<dyn Printer>; 2] = [
        Box::new(OldPrinter),
        Box::new(PrinterAdapter::new(NewPrinter)),
    ];

    for printer in &printers {
        printer.print("Hello, World!", out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_forwards_to_new_interface() {
        let adapter = PrinterAdapter::new(NewPrinter);
        let mut out: Vec<u8> = Vec::new();
        adapter.print("report.pdf", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Printing document: report.pdf\n");
    }

    #[test]
    fn test_transcript() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Printing: Hello, World!\nPrinting document: Hello, World!\n"
        );
    }
}
