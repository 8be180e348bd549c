//! キーボードショートカット

/// 押されたキーの組み合わせ
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyChord<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+Shift+C
    QuickCopy,
    /// Ctrl+Shift+V: 非同期クリップボードから画像を読む
    PasteImage,
}

impl Shortcut {
    /// macOSのCmdもCtrlとして扱う
    pub fn matching(chord: &KeyChord<'_>) -> Option<Shortcut> {
        if !(chord.ctrl || chord.meta) || !chord.shift || chord.alt {
            return None;
        }
        if chord.key.eq_ignore_ascii_case("c") {
            Some(Shortcut::QuickCopy)
        } else if chord.key.eq_ignore_ascii_case("v") {
            Some(Shortcut::PasteImage)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(key: &str, ctrl: bool, shift: bool) -> KeyChord<'_> {
        KeyChord {
            key,
            ctrl,
            shift,
            ..Default::default()
        }
    }

    #[test]
    fn test_quick_copy() {
        assert_eq!(Shortcut::matching(&chord("C", true, true)), Some(Shortcut::QuickCopy));
        assert_eq!(Shortcut::matching(&chord("c", true, true)), Some(Shortcut::QuickCopy));
    }

    #[test]
    fn test_paste_image() {
        assert_eq!(Shortcut::matching(&chord("V", true, true)), Some(Shortcut::PasteImage));
        let mac = KeyChord {
            key: "V",
            meta: true,
            shift: true,
            ..Default::default()
        };
        assert_eq!(Shortcut::matching(&mac), Some(Shortcut::PasteImage));
    }

    #[test]
    fn test_plain_copy_is_not_a_shortcut() {
        assert_eq!(Shortcut::matching(&chord("c", true, false)), None);
        assert_eq!(Shortcut::matching(&chord("C", false, true)), None);
        let alt = KeyChord {
            key: "C",
            ctrl: true,
            shift: true,
            alt: true,
            ..Default::default()
        };
        assert_eq!(Shortcut::matching(&alt), None);
    }
}
