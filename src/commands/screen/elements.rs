use serde::{Deserialize, Serialize};

const DESCRIBE_LIMIT: usize = 25;

/// One building block of a guild's info screen.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenElement {
    Text {
        text: String,
    },
    Image {
        url: String,
        #[serde(default)]
        raw: bool,
        #[serde(default)]
        color: Option<u32>,
    },
    TextBox {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        color: Option<u32>,
    },
    List {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        color: Option<u32>,
        #[serde(default)]
        enumerated: bool,
        entries: Vec<ListEntry>,
    },
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ListEntry {
    pub name: String,
    pub value: String,
}

/// One line summary of an element for the overview listing.
pub fn describe(element: &ScreenElement) -> String {
    match element {
        ScreenElement::Text { text } => format!("A text field containing \"{}\".", truncate(text, DESCRIBE_LIMIT)),
        ScreenElement::Image { url, raw, .. } => {
            if *raw {
                format!("An image from URL {}.", url)
            } else {
                format!("An embedded image from URL {}.", url)
            }
        }
        ScreenElement::TextBox { title, description, .. } => {
            let mut message = String::from("A text box.");
            if let Some(title) = title {
                message += &format!(" Title is \"{}\".", truncate(title, DESCRIBE_LIMIT));
            }
            if let Some(description) = description {
                message += &format!(" Description is \"{}\".", truncate(description, DESCRIBE_LIMIT));
            }
            message
        }
        ScreenElement::List {
            title,
            enumerated,
            entries,
            ..
        } => {
            let mut message = String::from("A");
            if *enumerated {
                message += " numbered";
            }
            message += " list";
            if let Some(title) = title {
                message += &format!(" titled {}", title);
            }
            message += &format!(" containing {} entries.", entries.len());
            message
        }
    }
}

pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut cut: String = text.chars().take(limit).collect();
        cut += "...";
        cut
    } else {
        text.to_string()
    }
}

#[derive(Debug, PartialEq)]
pub enum IndexError {
    NotANumber,
    OutOfRange(usize),
}

/// Turns a one-based user-supplied index into a zero-based one, bounds checked
/// against a list of ``len`` elements.
pub fn parse_index(raw: &str, len: usize) -> Result<usize, IndexError> {
    let index: i64 = raw.parse().map_err(|_| IndexError::NotANumber)?;
    if index >= 1 && index as usize <= len {
        Ok(index as usize - 1)
    } else {
        Err(IndexError::OutOfRange(len))
    }
}

/// Removes the element at ``from`` and reinserts it at ``to``, where ``to``
/// indexes the reduced list after removal. A ``to`` past the end appends.
pub fn move_element<T>(list: &mut Vec<T>, from: usize, to: usize) {
    let element = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, element);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_a_noop_at_the_limit() {
        let exact = "a".repeat(25);
        assert_eq!(truncate(&exact, 25), exact);
    }

    #[test]
    fn truncate_cuts_past_the_limit() {
        let long = "a".repeat(26);
        let mut expected = "a".repeat(25);
        expected += "...";
        assert_eq!(truncate(&long, 25), expected);
    }

    #[test]
    fn describing_elements() {
        let text = ScreenElement::Text {
            text: "welcome".to_string(),
        };
        assert_eq!(describe(&text), "A text field containing \"welcome\".");

        let image = ScreenElement::Image {
            url: "https://example.com/a.png".to_string(),
            raw: false,
            color: None,
        };
        assert_eq!(describe(&image), "An embedded image from URL https://example.com/a.png.");

        let raw_image = ScreenElement::Image {
            url: "https://example.com/a.png".to_string(),
            raw: true,
            color: None,
        };
        assert_eq!(describe(&raw_image), "An image from URL https://example.com/a.png.");

        let type_box = ScreenElement::TextBox {
            title: Some("Rules".to_string()),
            description: None,
            color: None,
        };
        assert_eq!(describe(&type_box), "A text box. Title is \"Rules\".");

        let list = ScreenElement::List {
            title: Some("Staff".to_string()),
            description: None,
            color: None,
            enumerated: true,
            entries: vec![ListEntry {
                name: "a".to_string(),
                value: "b".to_string(),
            }],
        };
        assert_eq!(describe(&list), "A numbered list titled Staff containing 1 entries.");
    }

    #[test]
    fn index_parsing() {
        assert_eq!(parse_index("1", 3), Ok(0));
        assert_eq!(parse_index("3", 3), Ok(2));
        assert_eq!(parse_index("4", 3), Err(IndexError::OutOfRange(3)));
        assert_eq!(parse_index("0", 3), Err(IndexError::OutOfRange(3)));
        assert_eq!(parse_index("-1", 3), Err(IndexError::OutOfRange(3)));
        assert_eq!(parse_index("abc", 3), Err(IndexError::NotANumber));
    }

    #[test]
    fn moving_within_a_list() {
        let mut list = vec![1, 2, 3, 4];
        move_element(&mut list, 0, 2);
        assert_eq!(list, vec![2, 3, 1, 4]);
    }

    #[test]
    fn moving_to_the_end_appends() {
        let mut list = vec![1, 2, 3];
        move_element(&mut list, 0, 2);
        assert_eq!(list, vec![2, 3, 1]);
    }

    #[test]
    fn moving_an_element_onto_itself_changes_nothing() {
        let mut list = vec![1, 2, 3];
        move_element(&mut list, 1, 1);
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn elements_round_trip_through_json() {
        let element = ScreenElement::List {
            title: None,
            description: Some("who does what".to_string()),
            color: Some(0x00ff_00),
            enumerated: false,
            entries: vec![],
        };

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["kind"], "list");

        let back: ScreenElement = serde_json::from_value(value).unwrap();
        match back {
            ScreenElement::List { description, color, .. } => {
                assert_eq!(description.as_deref(), Some("who does what"));
                assert_eq!(color, Some(0x00ff_00));
            }
            _ => panic!("wrong variant"),
        }
    }
}
