/// First character covered by the tables (space).
pub const FIRST: u8 = 0x20;

/// Last character covered by the tables (tilde).
pub const LAST: u8 = 0x7E;

/// One entry per printable ASCII character.
pub const TABLE_LEN: usize = (LAST - FIRST + 1) as usize;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// A `%XX` unit with uppercase hex digits.
pub type Triplet = [u8; 3];

/// Character to triplet, indexed by `c - FIRST`.
pub static ENCODE_TABLE: [Triplet; TABLE_LEN] = build_encode_table();

/// Triplet to character, derived from the encoding table.
///
/// Entries are sorted by triplet: uppercase hex digits sort in the same
/// order as their values, so character order and triplet order agree.
pub static DECODE_TABLE: [(Triplet, u8); TABLE_LEN] = invert(build_encode_table());

const fn build_encode_table() -> [Triplet; TABLE_LEN] {
    let mut table = [[0u8; 3]; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        let c = FIRST + i as u8;
        table[i] = [
            b'%',
            HEX_UPPER[(c >> 4) as usize],
            HEX_UPPER[(c & 0x0F) as usize],
        ];
        i += 1;
    }
    table
}

const fn invert(encode: [Triplet; TABLE_LEN]) -> [(Triplet, u8); TABLE_LEN] {
    let mut table = [([0u8; 3], 0u8); TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = (encode[i], FIRST + i as u8);
        i += 1;
    }
    table
}

/// Look up the triplet for a character, or `None` outside printable ASCII.
#[inline]
pub fn encode_char(c: char) -> Option<&'static Triplet> {
    let code = u32::from(c);
    if (u32::from(FIRST)..=u32::from(LAST)).contains(&code) {
        Some(&ENCODE_TABLE[(code - u32::from(FIRST)) as usize])
    } else {
        None
    }
}

/// Look up the character for a 3-byte chunk. Matching is exact, so
/// lowercase hex digits miss.
#[inline]
pub fn decode_triplet(chunk: &[u8]) -> Option<char> {
    DECODE_TABLE
        .binary_search_by(|(triplet, _)| triplet.as_slice().cmp(chunk))
        .ok()
        .map(|i| char::from(DECODE_TABLE[i].1))
}
