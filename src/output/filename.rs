//! Output file naming.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LyricError;
use crate::types::SongRecord;

/// How an output file is named after its song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFilenameFormat {
    /// `"{name} - {singer}"`
    #[default]
    NameSinger,
    /// `"{singer} - {name}"`
    SingerName,
    /// `"{name}"`
    Name,
}

impl OutputFilenameFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameSinger => "name-singer",
            Self::SingerName => "singer-name",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for OutputFilenameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFilenameFormat {
    type Err = LyricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-singer" => Ok(Self::NameSinger),
            "singer-name" => Ok(Self::SingerName),
            "name" => Ok(Self::Name),
            other => Err(LyricError::System(format!(
                "unrecognized output filename format '{other}'"
            ))),
        }
    }
}

/// File name (without extension) for `song`, safe on every common filesystem.
pub fn output_name(song: &SongRecord, format: OutputFilenameFormat) -> String {
    let name = match format {
        OutputFilenameFormat::NameSinger => format!("{} - {}", song.name, song.singer),
        OutputFilenameFormat::SingerName => format!("{} - {}", song.singer, song.name),
        OutputFilenameFormat::Name => song.name.clone(),
    };
    safe_filename(&name)
}

/// Replace characters that are not allowed in file names.
///
/// Visible reserved characters become look-alikes so the name stays
/// readable; whitespace controls become spaces; `?`, NUL and form feed are
/// dropped; any other control character becomes `_`.
pub fn safe_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '"' => out.push_str("''"),
            '<' => out.push('\u{02c2}'),
            '>' => out.push('\u{02c3}'),
            '|' => out.push('\u{2223}'),
            ':' => out.push('-'),
            '*' => out.push('\u{2217}'),
            '\\' | '/' => out.push('\u{2044}'),
            '\0' | '\x0c' | '?' => {}
            '\t' | '\n' | '\r' | '\x0b' => out.push(' '),
            c if (c as u32) < 0x20 => out.push('_'),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVED: &[char] = &['"', '<', '>', '|', ':', '*', '?', '\\', '/', '\0'];

    #[test]
    fn replaces_reserved_characters() {
        let safe = safe_filename("A:B*C");
        assert_eq!(safe, "A-B\u{2217}C");
        assert!(!safe.contains(RESERVED));
    }

    #[test]
    fn substitution_table() {
        assert_eq!(safe_filename("\""), "''");
        assert_eq!(safe_filename("<>"), "\u{02c2}\u{02c3}");
        assert_eq!(safe_filename("a|b"), "a\u{2223}b");
        assert_eq!(safe_filename("AC/DC\\x"), "AC\u{2044}DC\u{2044}x");
        assert_eq!(safe_filename("why?"), "why");
        assert_eq!(safe_filename("a\tb\nc"), "a b c");
        assert_eq!(safe_filename("a\x01b"), "a_b");
    }

    #[test]
    fn leaves_safe_names_alone() {
        assert_eq!(safe_filename("晴天 - 周杰伦"), "晴天 - 周杰伦");
    }

    #[test]
    fn is_deterministic() {
        let input = "x<y>:z";
        assert_eq!(safe_filename(input), safe_filename(input));
    }

    #[test]
    fn output_name_formats() {
        let song = SongRecord::new("1", "Name", "Singer");
        assert_eq!(output_name(&song, OutputFilenameFormat::NameSinger), "Name - Singer");
        assert_eq!(output_name(&song, OutputFilenameFormat::SingerName), "Singer - Name");
        assert_eq!(output_name(&song, OutputFilenameFormat::Name), "Name");
    }

    #[test]
    fn output_name_is_sanitized() {
        let song = SongRecord::new("1", "What?", "AC/DC");
        assert_eq!(
            output_name(&song, OutputFilenameFormat::SingerName),
            "AC\u{2044}DC - What"
        );
    }

    #[test]
    fn unknown_format_is_system_error() {
        let err = "title-only".parse::<OutputFilenameFormat>().unwrap_err();
        assert!(matches!(err, LyricError::System(_)));
    }
}
