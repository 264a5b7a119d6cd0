#![no_main]

use jcompiler::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The lexer never fails; every token stream goes through the parser.
        let lexed = lexer::lex(s);
        assert_eq!(
            lexed.tokens.iter().filter(|t| t.kind == lexer::TokenKind::Eof).count(),
            1
        );
        let _ = parser::parse(&lexed.tokens);
    }
});
