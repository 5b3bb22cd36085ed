use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::map::{Entry, IndexMap};

/// Shortcode columns of `data/emoji.txt`, in table order
const LANGUAGES: [&str; 6] = ["en", "es", "pt", "it", "fr", "de"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Component,
    Fully,
    Minimal,
    Unqualified,
}

impl Status {
    pub fn parse(s: &str) -> Option<Status> {
        Some(match s {
            "component" => Status::Component,
            "fully_qualified" => Status::Fully,
            "minimally_qualified" => Status::Minimal,
            "unqualified" => Status::Unqualified,
            _ => return None,
        })
    }

    /// Path of the runtime `Status` variant
    pub const fn as_path(self) -> &'static str {
        match self {
            Status::Component => "Status::Component",
            Status::Fully => "Status::FullyQualified",
            Status::Minimal | Status::Unqualified => "Status::NonFullyQualified",
        }
    }

    /// Only these may be produced by `emojize`, so only these own their shortcodes
    pub const fn owns_names(self) -> bool {
        matches!(self, Status::Component | Status::Fully)
    }
}

#[derive(Debug, Clone)]
pub struct ParsedEmoji<'a> {
    pub emoji: String,
    pub status: Status,
    pub version: f32,
    pub variant: bool,
    pub names: [Option<&'a str>; 6],
    pub aliases: Vec<&'a str>,
}

fn parse_shortcode<'a>(field: &'a str, line: usize) -> Option<&'a str> {
    if field.is_empty() {
        return None;
    }

    if field.len() < 3 || !field.starts_with(':') || !field.ends_with(':') {
        panic!("Malformed shortcode on line {line}: {field}");
    }

    Some(field)
}

fn parse_line(line: &str, lineno: usize) -> ParsedEmoji<'_> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();

    let [cps, status, version, variant, en, aliases, es, pt, it, fr, de] = fields[..] else {
        panic!("Expected 11 fields on line {lineno}, found {}", fields.len());
    };

    let emoji = cps
        .split_ascii_whitespace()
        .map(|cp| {
            let cp = u32::from_str_radix(cp, 16).unwrap_or_else(|_| panic!("Bad code point on line {lineno}: {cp}"));
            char::from_u32(cp).unwrap_or_else(|| panic!("Invalid scalar value on line {lineno}: {cp:X}"))
        })
        .collect::<String>();

    if emoji.is_empty() {
        panic!("Empty emoji on line {lineno}");
    }

    let status = Status::parse(status).unwrap_or_else(|| panic!("Unknown qualification on line {lineno}: {status}"));
    let version = version.parse().unwrap_or_else(|_| panic!("Bad version on line {lineno}: {version}"));

    let variant = match variant {
        "y" => true,
        "n" => false,
        _ => panic!("Bad variant flag on line {lineno}: {variant}"),
    };

    let names = [en, es, pt, it, fr, de].map(|name| parse_shortcode(name, lineno));

    if names[0].is_none() {
        panic!("Missing English name on line {lineno}");
    }

    let aliases = aliases
        .split_ascii_whitespace()
        .map(|alias| parse_shortcode(alias, lineno).unwrap())
        .collect();

    ParsedEmoji {
        emoji,
        status,
        version,
        variant,
        names,
        aliases,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=data/emoji.txt");

    let path = Path::new(&env::var("OUT_DIR")?).join("codegen.rs");
    let mut file = BufWriter::new(File::create(&path)?);

    let src = include_str!("./data/emoji.txt");
    let mut emojis: IndexMap<String, ParsedEmoji> = IndexMap::new();

    for (idx, line) in src.lines().enumerate() {
        let line = line.trim();

        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        let parsed = parse_line(line, idx + 1);

        match emojis.entry(parsed.emoji.clone()) {
            Entry::Vacant(v) => {
                v.insert(parsed);
            }
            Entry::Occupied(_) => panic!("Duplicate emoji on line {}: {}", idx + 1, parsed.emoji),
        }
    }

    if emojis.len() >= u16::MAX as usize {
        panic!("Too many emojis for u16 indices: {}", emojis.len());
    }

    // shortcode tables, per language, only for entries that own their names
    let mut names: [IndexMap<&str, usize>; 6] = Default::default();
    let mut aliases: IndexMap<&str, usize> = IndexMap::new();

    for (idx, e) in emojis.values().enumerate() {
        if !e.status.owns_names() {
            continue;
        }

        for (lang, name) in e.names.iter().copied().enumerate() {
            if let Some(name) = name {
                if names[lang].insert(name, idx).is_some() {
                    panic!("Duplicate {} shortcode: {name}", LANGUAGES[lang]);
                }
            }
        }
    }

    // aliases override English names of other entries, e.g. `:dog:`
    aliases.extend(names[0].iter().map(|(name, idx)| (*name, *idx)));

    let mut own_aliases: IndexMap<&str, usize> = IndexMap::new();
    for (idx, e) in emojis.values().enumerate() {
        if !e.status.owns_names() {
            continue;
        }

        for &alias in &e.aliases {
            if own_aliases.insert(alias, idx).is_some() {
                panic!("Duplicate alias: {alias}");
            }
        }
    }
    aliases.extend(own_aliases);

    // every form maps to the fully-qualified entry sharing its English name
    let fully_qualified: Vec<usize> = emojis
        .values()
        .enumerate()
        .map(|(idx, e)| match e.status {
            Status::Minimal | Status::Unqualified => {
                let name = e.names[0].unwrap();
                *names[0].get(name).unwrap_or_else(|| panic!("No fully-qualified form for {name}"))
            }
            _ => idx,
        })
        .collect();

    writeln!(file, "static ENTRIES: [EmojiEntry; {}] = [", emojis.len())?;
    for e in emojis.values() {
        write!(
            file,
            "EmojiEntry {{ emoji: {:?}, status: {}, version: {:?}f32, variant: {}, names: [",
            e.emoji,
            e.status.as_path(),
            e.version,
            e.variant,
        )?;
        for name in &e.names {
            match name {
                Some(name) => write!(file, "Some({name:?}),")?,
                None => write!(file, "None,")?,
            }
        }
        writeln!(file, "], aliases: &{:?} }},", e.aliases)?;
    }
    writeln!(file, "];")?;

    writeln!(
        file,
        "static FULLY_QUALIFIED: [u16; {}] = {:?};",
        fully_qualified.len(),
        fully_qualified
    )?;

    let mut emoji_to_index = phf_codegen::Map::new();
    for (idx, emoji) in emojis.keys().enumerate() {
        emoji_to_index.entry(emoji.as_str(), &idx.to_string());
    }

    writeln!(
        file,
        "static EMOJI_TO_INDEX: phf::Map<&'static str, u16> = {};",
        emoji_to_index.build()
    )?;

    writeln!(file, "static NAMES_TO_INDEX: [phf::Map<&'static str, u16>; 6] = [")?;
    for table in &names {
        let mut map = phf_codegen::Map::new();
        for (name, idx) in table {
            map.entry(*name, &idx.to_string());
        }
        writeln!(file, "{},", map.build())?;
    }
    writeln!(file, "];")?;

    let mut alias_map = phf_codegen::Map::new();
    for (alias, idx) in &aliases {
        alias_map.entry(*alias, &idx.to_string());
    }

    writeln!(
        file,
        "static ALIASES_TO_INDEX: phf::Map<&'static str, u16> = {};",
        alias_map.build()
    )?;

    Ok(())
}
