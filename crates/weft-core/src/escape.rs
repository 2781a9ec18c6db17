//! Markup escaping for text nodes.

use std::borrow::Cow;
use std::io::{self, Write};

/// Returns `s` with `& < > " '` replaced by entities.
///
/// Input without any of those characters comes back as `Cow::Borrowed` and
/// costs no allocation. Uses the same entity table as [`write_escaped`], so
/// buffering the result and streaming produce identical bytes.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match escape_char(c) {
				Some(entity) => escaped.push_str(entity),
				None => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Writes `s` to `out` with markup special characters escaped.
///
/// Unescaped runs are written as whole slices.
pub fn write_escaped(out: &mut dyn Write, s: &str) -> io::Result<()> {
	let mut start = 0;
	for (i, c) in s.char_indices() {
		if let Some(entity) = escape_char(c) {
			out.write_all(&s.as_bytes()[start..i])?;
			out.write_all(entity.as_bytes())?;
			start = i + c.len_utf8();
		}
	}
	out.write_all(&s.as_bytes()[start..])
}

fn escape_char(c: char) -> Option<&'static str> {
	match c {
		'&' => Some("&amp;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		'"' => Some("&quot;"),
		'\'' => Some("&#x27;"),
		_ => None,
	}
}
