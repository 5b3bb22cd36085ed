use emoji::{Demojize, Language, Token};

fn main() {
    let text = "\u{1F468}\u{200D}\u{1F469}\u{1F3FF}\u{200D}\u{1F467}\u{1F3FB}\u{200D}\u{1F466}\u{1F3FE} says \u{1F44D}";

    for token in emoji::analyze(text, true, true) {
        match &token {
            Token::Emoji(m) => println!("{}..{}: {}", m.start, m.end, m.entry.status()),
            Token::NonRgi(m) => println!("{}..{}: non-RGI, {} parts", m.start(), m.end(), m.emojis().len()),
            Token::Char(_) => {}
        }
        print_chars(token.text().chars());
    }

    println!("{}", emoji::demojize(text));
    println!("{}", Demojize::new().keep_zwj(false).language(Language::German).apply(text));
}

fn print_chars(c: std::str::Chars) {
    for c in c {
        print!("{:X} ", c as u32);
    }
    println!();
}
