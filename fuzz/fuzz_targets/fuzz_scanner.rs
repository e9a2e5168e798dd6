#![no_main]
use std::io;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use streambuffer::{BufferedScanner, ByteSource, ScannerOptions};

/// Serves the input in chunks whose sizes are picked by the fuzzer.
struct Jittery<'a> {
    data: &'a [u8],
    sizes: &'a [u8],
    turn: usize,
}

impl ByteSource for Jittery<'_> {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let step = self
            .sizes
            .get(self.turn % self.sizes.len().max(1))
            .map_or(buf.len(), |&s| usize::from(s).max(1));
        self.turn += 1;
        let n = step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Advance,
    SkipWhitespace,
    SkipLine,
    SkipEndOfLine,
    ParseInt { allow_end_of_line: bool },
    ParseToken,
}

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    capacity: u8,
    sizes: &'a [u8],
    ops: Vec<Op>,
    data: &'a [u8],
}

/// Applies one operation and records everything observable about it.
fn step<S: ByteSource>(s: &mut BufferedScanner<S>, op: Op, tok: &mut Vec<u8>) -> String {
    let outcome = match op {
        Op::Advance => {
            s.advance();
            String::new()
        }
        Op::SkipWhitespace => {
            s.skip_whitespace();
            String::new()
        }
        Op::SkipLine => format!("{}", s.skip_line()),
        Op::SkipEndOfLine => format!("{:?}", s.skip_end_of_line(0)),
        Op::ParseInt { allow_end_of_line } => {
            format!("{:?}", s.parse_signed_int(0, allow_end_of_line))
        }
        Op::ParseToken => {
            s.parse_token(tok);
            format!("{tok:?}")
        }
    };
    format!("{outcome} @{} {:?}", s.position(), s.peek())
}

// A tiny, jittery buffer must behave exactly like one that holds the whole
// input at once.
fuzz_target!(|input: Input<'_>| {
    let options = ScannerOptions {
        capacity: usize::from(input.capacity),
    };
    let mut small = BufferedScanner::with_options(
        Jittery {
            data: input.data,
            sizes: input.sizes,
            turn: 0,
        },
        options,
    );
    let mut whole = BufferedScanner::with_options(
        input.data,
        ScannerOptions {
            capacity: input.data.len(),
        },
    );
    let (mut a, mut b) = (Vec::new(), Vec::new());
    for &op in &input.ops {
        assert_eq!(step(&mut small, op, &mut a), step(&mut whole, op, &mut b));
    }
    while let Some(byte) = whole.peek() {
        assert_eq!(small.peek(), Some(byte));
        small.advance();
        whole.advance();
    }
    assert!(small.is_eof());
});
