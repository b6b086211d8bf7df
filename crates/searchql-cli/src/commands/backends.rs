use searchql_lib::{Backend, FieldMode};

pub fn run() {
    print!("{}", format_backends());
}

pub(crate) fn format_backends() -> String {
    let mut out = format!("Supported backends ({}):\n", Backend::ALL.len());
    for backend in Backend::ALL {
        let mode = match backend.field_mode() {
            FieldMode::Inline => "inline",
            FieldMode::Split => "split",
        };
        let aliases = &backend.aliases()[1..];
        if aliases.is_empty() {
            out.push_str(&format!("  {} [{}]\n", backend.name(), mode));
        } else {
            out.push_str(&format!(
                "  {} ({}) [{}]\n",
                backend.name(),
                aliases.join(", "),
                mode
            ));
        }
    }
    out
}
