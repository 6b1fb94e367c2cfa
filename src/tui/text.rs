use manifest::terminal::{
    box_bottom, box_line, box_line_center, box_opt, box_rule, box_top, clear, flush, format_number,
    print_error,
};
use manifest::{BookKeeper, Settings};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

pub fn print_help() {
    box_top("Manifest");
    box_line_center("Personalized wordlist generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a menu to collect");
    box_line("     facts about the target and generate a wordlist.");
    box_line("  2) Client: Pass a criteria file (-f target.json) and flags to");
    box_line("     generate without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  manifest [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Input:");
    box_opt("  -f, --file <FILE>", "JSON criteria: category name to list of terms");
    box_opt("  -i, --input <FILE>", "Third-party wordlist to interleave with the output");
    box_line("");
    box_line(" Generation:");
    box_opt("      --min <N>", "Minimum candidate length (default: 6)");
    box_opt("      --max <N>", "Maximum candidate length (default: 12)");
    box_opt("  -n, --num <N>", "Maximum number of candidates (default: 20,000)");
    box_opt("      --exhaustive", "Substitute every combination of positions, not one at a time");
    box_opt("      --strict-pairs", "Drop the unpaired tail when interleaving ranked groups");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --out [FILE]", "Write to file (default: dictionary.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except candidates and errors");
    box_opt("      --verbose", "Log generation statistics to stderr");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from the saved settings file");
    box_opt("      --save", "Save the resulting settings as the new defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("CATEGORIES:");
    box_line("  cities colors family jobs music other pets schools sports states");
    box_line("  streets, plus phone years zip_codes street_numbers. Any other");
    box_line("  name is combined like a free-text category.");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  manifest                            Interactive menu");
    box_line("  manifest -f acme.json               Wordlist to stdout");
    box_line("  manifest -f acme.json -o --min 8    Length 8-12 into dictionary.txt");
    box_line("  manifest -f acme.json -i rockyou.txt -n 1000000 -o acme.txt");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_file_exists(file_name: &str) {
    print_error(&format!("File {file_name} already exists."));
    println!();
    box_top("");
    box_line_center("o) overwrite | c) cancel");
    box_bottom();
    println!();
    flush();
}

pub fn print_main_menu(book: &BookKeeper, selected: Option<&str>, error: Option<&str>) {
    box_top("Main Menu");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");
    box_line(&format!(
        "  Selected category: {}",
        selected.unwrap_or("(none)")
    ));
    box_line(&format!(
        "  {} categories, {} terms",
        book.len(),
        book.all_words().count()
    ));
    box_rule();
    box_line("  1) show categories           7) clear category");
    box_line("  2) add category              8) import wordlist");
    box_line("  3) select category           9) load criteria file");
    box_line("  4) add words                10) save criteria file");
    box_line("  5) remove word              11) settings");
    box_line("  6) show words               12) help");
    box_line("                              13) quit");
    box_line("");
    box_bottom();

    match error {
        Some(msg) => print_error(msg),
        None => println!(),
    }
    flush();
}

pub fn print_categories(book: &BookKeeper) {
    box_top("Categories");
    if book.is_empty() {
        box_line("  (none)");
    }
    for name in book.category_names() {
        let terms = book.words(name).map_or(0, <[String]>::len);
        box_line(&format!("  {name:<24}{terms:>6} term(s)"));
    }
    box_bottom();
    println!();
}

pub fn print_words(category: &str, words: &[String]) {
    box_top(category);
    if words.is_empty() {
        box_line("  (empty)");
    }
    for word in words {
        box_line(&format!("  {word}"));
    }
    box_bottom();
    println!();
}

fn flag(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}

fn or_none(s: &str) -> &str {
    if s.is_empty() { "(none)" } else { s }
}

pub fn print_settings_menu(settings: &Settings, error: Option<&str>) {
    clear();
    box_top("Settings Menu");
    box_line_center("Esc/CTRL+Q: back | CTRL+U: clear input");
    box_line("");
    box_line(&format!("  1) Minimum length: {}", settings.min_length));
    box_line(&format!("  2) Maximum length: {}", settings.max_length));
    box_line(&format!(
        "  3) Number of candidates: {}",
        format_number(settings.password_count)
    ));
    box_line(&format!(
        "  4) Output file: {}",
        or_none(&settings.output_file_path)
    ));
    box_line(&format!(
        "  5) Third-party wordlist: {}",
        or_none(&settings.wordlist_path)
    ));
    box_line(&format!(
        "  6) Exhaustive substitution: {}",
        flag(settings.exhaustive)
    ));
    box_line(&format!("  7) Strict pairing: {}", flag(settings.strict_pairs)));
    box_rule();
    box_line("  s) save settings   d) restore defaults");
    box_bottom();

    match error {
        Some(msg) => print_error(msg),
        None => println!(),
    }
    flush();
}
