use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::utils::file_parsing::{split_csv_preserving_quotes, strip_surrounding_quotes};
use std::io::{BufRead, Error, ErrorKind};
use std::sync::Arc;

/// Token ARFF uses for a missing value. Stored verbatim in the dataset.
pub const MISSING_VALUE: &str = "?";

#[derive(Debug)]
pub(super) enum AttributeDecl {
    Numeric,
    Nominal(Vec<String>),
}

pub(super) fn is_comment_or_empty(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.starts_with('%')
}

/// Reads header lines up to and including `@data`. `line_no` tracks the
/// 1-based number of the last line read, so callers can locate failures.
pub(super) fn parse_header<R: BufRead>(
    reader: &mut R,
    class_index: Option<usize>,
    line_no: &mut usize,
) -> Result<InstanceHeader, Error> {
    let mut relation: Option<String> = None;
    let mut attributes: Vec<AttributeRef> = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                "ARFF file ended before @data",
            ));
        }
        *line_no += 1;

        if is_comment_or_empty(&line) {
            continue;
        }

        let low = line.trim().to_lowercase();
        if low.starts_with("@relation") {
            if relation.is_some() || !attributes.is_empty() {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    "@relation must appear once, before any @attribute",
                ));
            }
            let raw = line.trim()["@relation".len()..].trim();
            relation = Some(strip_surrounding_quotes(raw).to_string());
        } else if low.starts_with("@attribute") {
            let (name, decl) = parse_attribute_line(&line)?;
            let attribute: AttributeRef = match decl {
                AttributeDecl::Numeric => Arc::new(NumericAttribute::new(name)),
                AttributeDecl::Nominal(values) => {
                    Arc::new(NominalAttribute::with_values(name, values))
                }
            };
            attributes.push(attribute);
        } else if low.starts_with("@data") {
            break;
        } else {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("Unsupported header directive: {}", line.trim()),
            ));
        }
    }

    if attributes.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            "ARFF header declares no attributes",
        ));
    }

    let class_index = class_index.unwrap_or(attributes.len() - 1);
    if class_index >= attributes.len() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!(
                "Class index {class_index} out of range for {} attributes",
                attributes.len()
            ),
        ));
    }

    let header = InstanceHeader::new(
        relation.unwrap_or_else(|| "unnamed_relation".to_string()),
        attributes,
        class_index,
    );
    if header.class_attribute().is_none() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "Class attribute '{}' must be nominal",
                header.attributes[class_index].name()
            ),
        ));
    }
    Ok(header)
}

pub(super) fn parse_attribute_line(line: &str) -> Result<(String, AttributeDecl), Error> {
    let rest = {
        let l = line.trim();
        let low = l.to_ascii_lowercase();
        if !low.starts_with("@attribute") {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "Line is not '@attribute'",
            ));
        }
        l["@attribute".len()..].trim()
    };

    let (name, after_name) = if let Some(quote) = rest.chars().next().filter(|c| *c == '\'' || *c == '"') {
        let end = rest
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == quote)
            .map(|(i, _)| i)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidData,
                    "Attribute name without closing quote marks",
                )
            })?;
        (rest[1..end].to_string(), rest[end + 1..].trim())
    } else {
        let mut it = rest.splitn(2, char::is_whitespace);
        let name = it.next().unwrap_or_default().to_string();
        let after = it
            .next()
            .ok_or_else(|| Error::new(ErrorKind::InvalidData, "Attribute type is missing"))?;
        (name, after.trim())
    };

    if name.is_empty() {
        return Err(Error::new(ErrorKind::InvalidData, "Attribute name is empty"));
    }
    if after_name.is_empty() {
        return Err(Error::new(ErrorKind::InvalidData, "Attribute type is missing"));
    }

    let low = after_name.to_ascii_lowercase();
    if low.starts_with("numeric") || low.starts_with("real") || low.starts_with("integer") {
        return Ok((name, AttributeDecl::Numeric));
    }

    if after_name.starts_with('{') {
        let close = after_name
            .rfind('}')
            .ok_or_else(|| Error::new(ErrorKind::InvalidData, "Nominal set without closing '}'"))?;

        let values = split_csv_preserving_quotes(&after_name[1..close])
            .iter()
            .map(|s| strip_surrounding_quotes(s).to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        if values.is_empty() {
            return Err(Error::new(ErrorKind::InvalidData, "Empty nominal domain"));
        }

        return Ok((name, AttributeDecl::Nominal(values)));
    }

    Err(Error::new(
        ErrorKind::InvalidData,
        format!("Attribute kind not supported: {after_name}"),
    ))
}

/// Validates one data line against `header` and returns its cells as
/// tokens. Numeric cells keep their original spelling.
pub(super) fn parse_instance_values(
    header: &InstanceHeader,
    line: &str,
) -> Result<Vec<String>, Error> {
    let tokens = split_csv_preserving_quotes(line.trim());
    if tokens.len() != header.attributes.len() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "Number of columns ({}) differs from number of attributes ({})",
                tokens.len(),
                header.attributes.len()
            ),
        ));
    }

    let mut values = Vec::with_capacity(tokens.len());
    for (idx, raw) in tokens.iter().enumerate() {
        let raw = raw.trim();
        if raw == MISSING_VALUE {
            values.push(MISSING_VALUE.to_string());
            continue;
        }

        let attr = &header.attributes[idx];

        if attr.as_any().is::<NumericAttribute>() {
            raw.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid numeric value '{raw}' for attribute #{idx}"),
                )
            })?;
            values.push(raw.to_string());
            continue;
        }

        if let Some(nominal) = attr.as_any().downcast_ref::<NominalAttribute>() {
            let key = strip_surrounding_quotes(raw);
            if !nominal.contains(key) {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("Nominal value '{key}' not found in domain of attribute #{idx}"),
                ));
            }
            values.push(key.to_string());
            continue;
        }

        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("Unsupported attribute type at column #{idx}"),
        ));
    }

    Ok(values)
}
