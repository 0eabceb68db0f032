//! Bulleted crop lists: `* Name: description` lines with continuation
//! lines folded into the current crop.

use super::{CropItem, VarietyItem};

/// Parse bullet-style crop lines in document order.
///
/// Each `* ` line opens a new crop. A continuation line with a colon
/// becomes a variety of the current crop; without one it fills an empty
/// description or extends it space-joined. Lines before the first bullet
/// have no crop to attach to and are dropped.
pub fn parse(body: &str) -> Vec<CropItem> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(Vec::new(), |mut crops, line| {
            if let Some(rest) = line.strip_prefix("* ") {
                crops.push(new_crop(rest));
            } else if let Some(current) = crops.last_mut() {
                attach_line(current, line);
            }
            crops
        })
}

fn new_crop(text: &str) -> CropItem {
    let (name, description) = match text.split_once(':') {
        Some((name, description)) => (name.trim(), description.trim()),
        None => (text.trim(), ""),
    };

    CropItem {
        name: name.to_string(),
        description: description.to_string(),
        varieties: Vec::new(),
    }
}

fn attach_line(crop: &mut CropItem, line: &str) {
    if let Some((name, description)) = line.split_once(':') {
        crop.varieties.push(VarietyItem {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
        });
    } else if crop.description.is_empty() {
        crop.description = line.to_string();
    } else {
        crop.description.push(' ');
        crop.description.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crops_and_varieties_in_source_order() {
        let crops = parse("* Rice: good in clay\nVariety A: high yield\n* Wheat: good in loam");
        assert_eq!(crops.len(), 2);
        assert_eq!(crops[0].name, "Rice");
        assert_eq!(crops[0].description, "good in clay");
        assert_eq!(crops[0].varieties.len(), 1);
        assert_eq!(crops[0].varieties[0].name, "Variety A");
        assert_eq!(crops[0].varieties[0].description, "high yield");
        assert_eq!(crops[1].name, "Wheat");
        assert_eq!(crops[1].description, "good in loam");
        assert!(crops[1].varieties.is_empty());
    }

    #[test]
    fn bullet_without_colon_is_a_bare_name() {
        let crops = parse("* Millet\nDrought hardy\nGrows fast");
        assert_eq!(crops.len(), 1);
        assert_eq!(crops[0].name, "Millet");
        assert_eq!(crops[0].description, "Drought hardy Grows fast");
    }

    #[test]
    fn continuation_fills_description_before_extending() {
        let crops = parse("* Rice\nPrefers standing water\nSwarna: popular variety");
        assert_eq!(crops[0].description, "Prefers standing water");
        assert_eq!(crops[0].varieties[0].name, "Swarna");
    }

    #[test]
    fn lines_before_first_bullet_are_dropped() {
        let crops = parse("These crops suit you:\n* Rice: good");
        assert_eq!(crops.len(), 1);
        assert_eq!(crops[0].name, "Rice");
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n").is_empty());
    }
}
