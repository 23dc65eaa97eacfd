use std::fmt::Write;

/**
Render a byte array like this:
0000 | 0d 01 00 00 00 00 00 00 00 00 00 00 d4 07 00 00
0010 | 00 00 00 00 61 64 6d 69 6e 2e 24 63 6d 64 00 00
0020 | 00 00 00 01 00 00 00 e6 00 00 00 10 69 73 4d 61
**/
pub fn pretty_dump(buffer: &[u8]) -> String {
    let mut dump = String::with_capacity(buffer.len() * 3 + (buffer.len() / 16 + 1) * 8);
    for (row, chunk) in buffer.chunks(16).enumerate() {
        if row > 0 {
            dump.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = write!(dump, "{:04x} |", row * 16);
        for byte in chunk {
            let _ = write!(dump, " {:02x}", byte);
        }
    }
    dump
}
