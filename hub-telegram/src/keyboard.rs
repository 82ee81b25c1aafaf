//! Button layout: options become a two-column inline grid; the optional persistent menu is a
//! single resized reply-keyboard row.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

/// Columns per inline keyboard row.
const COLUMNS: usize = 2;

/// Splits `options` into consecutive rows of two, in order; an odd last label gets its own row.
pub fn button_rows(options: &[String]) -> Vec<&[String]> {
    options.chunks(COLUMNS).collect()
}

/// Inline grid where each button's label doubles as its callback data. `None` for no options.
pub fn inline_keyboard(options: &[String]) -> Option<InlineKeyboardMarkup> {
    if options.is_empty() {
        return None;
    }
    let rows = button_rows(options).into_iter().map(|row| {
        row.iter()
            .map(|label| InlineKeyboardButton::callback(label.clone(), label.clone()))
            .collect::<Vec<_>>()
    });
    Some(InlineKeyboardMarkup::new(rows))
}

/// Persistent reply keyboard with all labels on one row. `None` for an empty menu.
pub fn reply_menu_keyboard(labels: &[String]) -> Option<KeyboardMarkup> {
    if labels.is_empty() {
        return None;
    }
    let row: Vec<KeyboardButton> = labels.iter().map(KeyboardButton::new).collect();
    Some(KeyboardMarkup::new(vec![row]).resize_keyboard())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_odd_count_leaves_single_last_row() {
        let options = labels(&["Class 10 Math 📐", "Physics Lab 🧪", "Quick Quiz 🧠"]);
        let rows = button_rows(&options);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &options[..2]);
        assert_eq!(rows[1], &options[2..]);
    }

    #[test]
    fn test_inline_keyboard_label_is_callback_data() {
        let options = labels(&["Next Topic", "Main Menu"]);
        let markup = inline_keyboard(&options).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 1);
        for (button, label) in markup.inline_keyboard[0].iter().zip(&options) {
            assert_eq!(&button.text, label);
            assert_eq!(
                button.kind,
                InlineKeyboardButtonKind::CallbackData(label.clone())
            );
        }
    }

    #[test]
    fn test_empty_options_have_no_markup() {
        assert!(inline_keyboard(&[]).is_none());
        assert!(reply_menu_keyboard(&[]).is_none());
    }

    #[test]
    fn test_reply_menu_is_one_resized_row() {
        let menu = reply_menu_keyboard(&labels(&["Quick Quiz 🧠", "/start"])).unwrap();
        assert_eq!(menu.keyboard.len(), 1);
        assert_eq!(menu.keyboard[0].len(), 2);
        assert_eq!(menu.keyboard[0][1].text, "/start");
        assert!(menu.resize_keyboard);
    }

    proptest! {
        #[test]
        fn rows_preserve_options(options in proptest::collection::vec("[a-zA-Z0-9 ]{1,12}", 0..16)) {
            let rows = button_rows(&options);
            prop_assert_eq!(rows.len(), options.len().div_ceil(2));
            prop_assert!(rows.iter().all(|r| r.len() == 1 || r.len() == 2));
            if let Some((last, init)) = rows.split_last() {
                prop_assert!(init.iter().all(|r| r.len() == 2));
                prop_assert_eq!(last.len(), if options.len() % 2 == 1 { 1 } else { 2 });
            }
            let flat: Vec<String> = rows.concat();
            prop_assert_eq!(flat, options);
        }
    }
}
