// Raw titles look like `Title (2002)`, `Haunted (2014/IV)` or
// `"Series" (2015) {Episode (#1.5)}`.

pub fn extract_year(raw: &str) -> Option<String> {
    let (_, rest) = raw.split_once('(')?;
    Some(rest.chars().take(4).collect())
}

pub fn extract_name(raw: &str) -> Option<String> {
    let (before, _) = raw.split_once('(')?;

    // drop the separator in front of the bracket
    let mut chars = before.chars();
    chars.next_back()?;
    let name = chars.as_str();

    let name = match name
        .strip_prefix('"')
        .and_then(|x| x.strip_suffix('"'))
    {
        Some(x) => x,
        None => name,
    };

    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

pub fn parse_title(raw: &str) -> Option<(String, Option<String>)> {
    Some((extract_name(raw)?, extract_year(raw)))
}
