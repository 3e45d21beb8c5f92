use std::io::{self, Read};

/// Read all of standard input.
pub fn read_stdin() -> io::Result<Vec<u8>> {
    read_all(&mut io::stdin().lock())
}

/// Read everything from `reader` into a Vec.
pub fn read_all(reader: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Strip one trailing `\n` or `\r\n`, as left by `echo` or a here-string.
pub fn strip_line_terminator(data: &[u8]) -> &[u8] {
    match data.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_lf() {
        assert_eq!(strip_line_terminator(b"hi\n"), b"hi");
    }

    #[test]
    fn test_strip_crlf() {
        assert_eq!(strip_line_terminator(b"hi\r\n"), b"hi");
    }

    #[test]
    fn test_strip_only_one() {
        assert_eq!(strip_line_terminator(b"hi\n\n"), b"hi\n");
    }

    #[test]
    fn test_lone_cr_kept() {
        assert_eq!(strip_line_terminator(b"hi\r"), b"hi\r");
    }

    #[test]
    fn test_read_all() {
        let mut input: &[u8] = b"%68%69\n";
        assert_eq!(read_all(&mut input).unwrap(), b"%68%69\n");
    }
}
