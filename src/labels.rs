// Counter captions. Pure so host tests can include them.

pub fn local_count_text(count: u64) -> String {
    format!(
        "you've boinged {} time{}",
        count,
        if count == 1 { "" } else { "s" }
    )
}

pub fn global_count_text(count: Option<u64>) -> String {
    match count {
        Some(c) => format!("{} boing{} worldwide", c, if c == 1 { "" } else { "s" }),
        None => "… boings worldwide".to_string(),
    }
}
