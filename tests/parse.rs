use base64::{engine::general_purpose::STANDARD, Engine};
use maker_cookie::{parse, parse_with, Cookies, Error, ParseOptions};

fn cookies<const N: usize>(pairs: [(&str, &str); N]) -> Cookies {
    pairs.into_iter().collect()
}

fn ok(input: &str) -> Cookies {
    let _ = env_logger::try_init();
    parse(input).unwrap()
}

#[test]
fn rejects_absent_input() {
    let err = parse(None::<&str>).unwrap_err();

    assert_eq!(err, Error::InvalidArgument);
    assert!(err.to_string().contains("argument str must be a string"));
}

#[test]
fn rejects_non_text() {
    let cases: [&[u8]; 3] = [b"\xFF", b"foo=\xC3\x28", b"\x80=bar"];

    for input in cases {
        let err = parse(input).unwrap_err();
        assert_eq!(err.to_string(), "argument str must be a string");
    }
}

#[test]
fn parse_pairs() {
    assert_eq!(ok("foo=bar"), cookies([("foo", "bar")]));
    assert_eq!(ok("foo=123"), cookies([("foo", "123")]));
}

#[test]
fn no_separator_is_empty() {
    for input in ["", "foo", "foo;bar", " ; ; ", "\"quoted\"", "%20"] {
        assert!(ok(input).is_empty(), "{input:?}");
    }
}

#[test]
fn ignore_ows() {
    assert_eq!(
        ok("FOO    = bar;   baz  =   raz"),
        cookies([("FOO", "bar"), ("baz", "raz")])
    );
}

#[test]
fn empty_values() {
    assert_eq!(ok("foo=; bar="), cookies([("foo", ""), ("bar", "")]));
    assert_eq!(ok("f="), cookies([("f", "")]));
    assert_eq!(ok("f=;b="), cookies([("f", ""), ("b", "")]));
}

#[test]
fn url_decode_values() {
    assert_eq!(
        ok(r#"foo="bar=123456789&name=Magic+Mouse""#),
        cookies([("foo", "bar=123456789&name=Magic+Mouse")])
    );
    assert_eq!(ok("email=%20%22%2c%3b%2f"), cookies([("email", " \",;/")]));
}

#[test]
fn quoted_values() {
    assert_eq!(ok(r#"foo="bar""#), cookies([("foo", "bar")]));
    assert_eq!(ok(r#"foo=" a b c ""#), cookies([("foo", " a b c ")]));
}

#[test]
fn trim_around_name_and_value() {
    let cases = [
        (r#"  foo  =  "bar"  "#, cookies([("foo", "bar")])),
        (
            "  foo  =  bar  ;  fizz  =  buzz  ",
            cookies([("foo", "bar"), ("fizz", "buzz")]),
        ),
        (r#" foo = " a b c " "#, cookies([("foo", " a b c ")])),
        (" = bar ", cookies([("", "bar")])),
        (" foo = ", cookies([("foo", "")])),
        ("   =   ", cookies([("", "")])),
        ("\tfoo\t=\tbar\t", cookies([("foo", "bar")])),
    ];

    for (input, expected) in cases {
        assert_eq!(ok(input), expected, "{input:?}");
    }
}

#[test]
fn original_value_on_escape_error() {
    assert_eq!(ok("foo=%1;bar=bar"), cookies([("foo", "%1"), ("bar", "bar")]));
    assert_eq!(ok("foo=%ZZ;bar=%FF"), cookies([("foo", "%ZZ"), ("bar", "%FF")]));
}

#[test]
fn escape_edge_cases() {
    assert_eq!(
        ok(r#"c=%ED%A0%80; d=ok%20then%zz; e="; f=%E2%82%AC"#),
        cookies([
            ("c", "%ED%A0%80"),
            ("d", "ok%20then%zz"),
            ("e", "\""),
            ("f", "€"),
        ])
    );
}

#[test]
fn ignore_cookies_without_value() {
    assert_eq!(ok("foo=bar;fizz  ;  buzz"), cookies([("foo", "bar")]));
    assert_eq!(ok("  fizz; foo=  bar"), cookies([("foo", "bar")]));
}

#[test]
fn ignore_duplicates() {
    assert_eq!(
        ok("foo=%1;bar=bar;foo=boo"),
        cookies([("foo", "%1"), ("bar", "bar")])
    );
    assert_eq!(
        ok("foo=false;bar=bar;foo=true"),
        cookies([("foo", "false"), ("bar", "bar")])
    );
    assert_eq!(
        ok("foo=;bar=bar;foo=boo"),
        cookies([("foo", ""), ("bar", "bar")])
    );
}

#[test]
fn native_property_names() {
    assert_eq!(
        ok("toString=foo;valueOf=bar"),
        cookies([("toString", "foo"), ("valueOf", "bar")])
    );
    assert_eq!(
        ok("__proto__=x;constructor=y"),
        cookies([("__proto__", "x"), ("constructor", "y")])
    );
}

#[test]
fn case_is_preserved() {
    assert_eq!(ok("Foo=1; foo=2"), cookies([("Foo", "1"), ("foo", "2")]));
}

#[test]
fn custom_decoder() {
    let options = ParseOptions::with_decoder(|value: &str| {
        STANDARD
            .decode(value)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_else(|| value.to_owned())
    });

    assert_eq!(
        parse_with(r#"foo="YmFy""#, &options),
        Ok(cookies([("foo", "bar")]))
    );
}

#[test]
fn custom_decoder_sees_unquoted_value() {
    let options = ParseOptions::with_decoder(|value: &str| format!("[{value}]"));

    assert_eq!(
        parse_with(r#" a = " x " ; b=%20"#, &options),
        Ok(cookies([("a", "[ x ]"), ("b", "[%20]")]))
    );
}

#[test]
fn large_header() {
    let header = (0..1000)
        .map(|i| format!("k{i}=v%20{i}"))
        .collect::<Vec<_>>()
        .join("; ");
    let parsed = ok(&header);

    assert_eq!(parsed.len(), 1000);
    assert_eq!(parsed.get("k0"), Some("v 0"));
    assert_eq!(parsed.get("k999"), Some("v 999"));
}

#[test]
fn many_segments_without_value() {
    let header = format!("{}a=1", "x;".repeat(10_000));
    assert_eq!(ok(&header), cookies([("a", "1")]));
}

#[test]
fn concurrent_calls() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let header = format!("n={i}; shared=%41");
                parse(header.as_str()).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let parsed = handle.join().unwrap();
        assert_eq!(parsed.get("n"), Some(i.to_string().as_str()));
        assert_eq!(parsed.get("shared"), Some("A"));
    }
}
