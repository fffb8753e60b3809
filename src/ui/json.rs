use std::io::{self, Write};

use serde_json::{Map, Value};

/// Write one NDJSON line: `{"event": <name>, ...fields}`.
///
/// Non-object `fields` are stored under `"data"`.
pub fn write_event(out: &mut impl Write, name: &str, fields: Value) -> io::Result<()> {
    let mut object = Map::new();
    object.insert("event".to_string(), Value::from(name));
    match fields {
        Value::Object(map) => object.extend(map),
        Value::Null => {}
        other => {
            object.insert("data".to_string(), other);
        }
    }

    let line = serde_json::to_string(&Value::Object(object))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Same as [`write_event`], on stdout.
pub fn emit(name: &str, fields: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, name, fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line(name: &str, fields: Value) -> String {
        let mut out = Vec::new();
        write_event(&mut out, name, fields).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn event_name_comes_first() {
        assert_eq!(
            line("contact", json!({"link": "mailto:a@b.c"})),
            "{\"event\":\"contact\",\"link\":\"mailto:a@b.c\"}\n"
        );
    }

    #[test]
    fn scalars_go_under_data() {
        assert_eq!(line("page", json!(3)), "{\"event\":\"page\",\"data\":3}\n");
        assert_eq!(line("done", Value::Null), "{\"event\":\"done\"}\n");
    }
}
