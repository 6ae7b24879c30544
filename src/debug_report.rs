use addrscan::{AddressMatch, ScanDetails};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Full-address report with gating and timing.
pub fn print_run(details: &ScanDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    print_header(&details.text, &details.locale, "addresses", &palette);

    println!("\n{}", palette.paint("━━━ Prefilter ━━━", ansi::GRAY));
    if details.metrics.gated_out {
        println!("  {}", palette.paint("✗ gated out (no digits or number words)", ansi::YELLOW));
    } else {
        println!("  {}", palette.paint("✓ admitted", ansi::GREEN));
    }
    println!("  {} {}", palette.dim("fields:"), palette.paint(details.fields.join(", "), ansi::BLUE));

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if details.results.is_empty() {
        println!("{}", palette.dim("  No addresses found"));
        if !details.metrics.gated_out {
            println!("\n{}", palette.dim("  Tip: try --streets to see street-level matches"));
        }
    } else {
        print_results(&details.results, &palette);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Prefilter: {}  │  Matching: {}",
        palette.paint(format!("{:?}", details.metrics.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.metrics.trigger), ansi::CYAN),
        palette.dim(format!("{:?}", details.metrics.matching)),
    );
    println!();
}

/// Street-level report.
pub fn print_streets(input: &str, locale: &str, found: &[AddressMatch], color: bool) {
    let palette = ansi::Palette::new(color);
    print_header(input, locale, "streets", &palette);

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if found.is_empty() {
        println!("{}", palette.dim("  No streets found"));
    } else {
        print_results(found, &palette);
    }
    println!();
}

fn print_header(input: &str, locale: &str, mode: &str, palette: &ansi::Palette) {
    let preview: String = input.chars().take(120).collect();
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Scanning for {} [{}]: \"{}\"", mode, locale, preview.trim()), ansi::CYAN))
    );
}

fn print_results(found: &[AddressMatch], palette: &ansi::Palette) {
    for (idx, m) in found.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(m.text.trim(), ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("span {}..{}", m.start, m.end), ansi::YELLOW),
        );
        for f in &m.fields {
            if f.start == m.start && f.end == m.end {
                continue;
            }
            println!(
                "      {} {}",
                palette.paint(format!("{:<15}", f.name), ansi::BLUE),
                palette.paint(m.value(&f.name).unwrap_or_default(), ansi::CYAN)
            );
        }
    }
}
