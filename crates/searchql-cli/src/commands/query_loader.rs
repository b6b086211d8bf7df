use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the query from `-q`, a file, or stdin (`-`).
pub fn load_query_source(query_path: Option<&Path>, query_text: Option<&str>) -> Result<String, String> {
    if let Some(text) = query_text {
        return Ok(text.to_owned());
    }

    if let Some(path) = query_path {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err("query is required: use positional argument, -q/--query, or `-` for stdin".to_string())
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(strip_final_newline(buf))
}

fn load_file(path: &Path) -> Result<String, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(strip_final_newline(content))
}

/// Files and pipes usually end in a newline that isn't part of the query.
fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
