//! Pascal unit text for one icon font.

use crate::config::{FAMILY_CONSTANT, ICON_CONSTANT_TYPE, USES_UNIT};

/// One `const NAME: WideChar = #$XXXX;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConstant {
    pub identifier: String,
    pub codepoint: u32,
}

/// A generated unit, held fully in memory until written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconUnit {
    pub unit_name: String,
    pub class_name: String,
    pub family_name: String,
    /// Sorted by identifier.
    pub constants: Vec<IconConstant>,
}

impl IconUnit {
    pub fn glyph_count(&self) -> usize {
        self.constants.len()
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("unit {};", self.unit_name),
            "\ninterface".to_string(),
            "\nuses".to_string(),
            format!("  {USES_UNIT};"),
            "\ntype".to_string(),
            format!("  {} = class", self.class_name),
            "  public".to_string(),
            format!("    const {FAMILY_CONSTANT} = {};", pascal_string(&self.family_name)),
        ];

        lines.extend(self.constants.iter().map(|c| {
            format!("    const {}: {ICON_CONSTANT_TYPE} = #${:X};", c.identifier, c.codepoint)
        }));

        lines.extend(["  end;", "\nimplementation", "\nend."].map(String::from));
        lines
    }

    /// The complete unit text, without a trailing newline.
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

/// Quote `s` as a Pascal string literal.
fn pascal_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(constants: Vec<IconConstant>) -> IconUnit {
        IconUnit {
            unit_name: "uTest".to_string(),
            class_name: "TTestIcons".to_string(),
            family_name: "Test".to_string(),
            constants,
        }
    }

    #[test]
    fn test_render_layout() {
        let text = unit(vec![
            IconConstant { identifier: "CHAR_A".to_string(), codepoint: 0x41 },
            IconConstant { identifier: "HOME".to_string(), codepoint: 0xF015 },
        ])
        .render();

        let expected = "unit uTest;

interface

uses
  System.SysUtils;

type
  TTestIcons = class
  public
    const FONT_FAMILY = 'Test';
    const CHAR_A: WideChar = #$41;
    const HOME: WideChar = #$F015;
  end;

implementation

end.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_unit_has_family_constant() {
        let u = unit(Vec::new());
        assert_eq!(u.glyph_count(), 0);
        assert!(u.render().contains("const FONT_FAMILY = 'Test';"));
        assert!(!u.render().ends_with('\n'));
    }

    #[test]
    fn test_hex_is_uppercase_without_padding() {
        let text = unit(vec![
            IconConstant { identifier: "SMALL".to_string(), codepoint: 0x9 },
            IconConstant { identifier: "WIDE".to_string(), codepoint: 0x1F600 },
        ])
        .render();
        assert!(text.contains("const SMALL: WideChar = #$9;"));
        assert!(text.contains("const WIDE: WideChar = #$1F600;"));
    }

    #[test]
    fn test_family_apostrophe_doubled() {
        assert_eq!(pascal_string("Bob's Icons"), "'Bob''s Icons'");
    }
}
