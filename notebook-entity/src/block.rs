use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::define::{BLOCKS, BlockId, Record};
use crate::util::deserialize_some;

/// A content block. Blocks do not know which page they belong to: a page
/// owns its blocks through its ordered `block_ids`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
  pub id: BlockId,
  #[serde(flatten)]
  pub kind: BlockKind,
}

impl Block {
  pub fn new<T: Into<String>>(id: T, kind: BlockKind) -> Self {
    Self {
      id: id.into(),
      kind,
    }
  }

  /// The text value of text-bearing blocks. Dividers and media blocks have none.
  pub fn text(&self) -> Option<&str> {
    self.kind.text()
  }
}

impl Record for Block {
  const FAMILY: &'static str = BLOCKS;

  fn id(&self) -> &str {
    &self.id
  }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
  H1,
  H2,
  H3,
  #[default]
  Paragraph,
}

/// The closed set of block kinds, tagged by `type` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum BlockKind {
  Text {
    #[serde(default)]
    text_type: TextType,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
  },
  Todo {
    value: String,
    #[serde(default)]
    checked: bool,
  },
  Bullet {
    value: String,
  },
  Numbered {
    value: String,
  },
  Quote {
    value: String,
  },
  Code {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
  },
  Divider,
  Image {
    src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
  },
  Video {
    src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
  },
}

impl BlockKind {
  pub fn paragraph<T: Into<String>>(value: T) -> Self {
    BlockKind::Text {
      text_type: TextType::Paragraph,
      value: value.into(),
      color: None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      BlockKind::Text { .. } => "text",
      BlockKind::Todo { .. } => "todo",
      BlockKind::Bullet { .. } => "bullet",
      BlockKind::Numbered { .. } => "numbered",
      BlockKind::Quote { .. } => "quote",
      BlockKind::Code { .. } => "code",
      BlockKind::Divider => "divider",
      BlockKind::Image { .. } => "image",
      BlockKind::Video { .. } => "video",
    }
  }

  pub fn text(&self) -> Option<&str> {
    match self {
      BlockKind::Text { value, .. }
      | BlockKind::Todo { value, .. }
      | BlockKind::Bullet { value }
      | BlockKind::Numbered { value }
      | BlockKind::Quote { value }
      | BlockKind::Code { value, .. } => Some(value.as_str()),
      BlockKind::Divider | BlockKind::Image { .. } | BlockKind::Video { .. } => None,
    }
  }
}

impl Display for BlockKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Partial update of a [Block]. The kind itself cannot change; fields the
/// block's kind does not carry are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockUpdate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text_type: Option<TextType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(
    default,
    deserialize_with = "deserialize_some",
    skip_serializing_if = "Option::is_none"
  )]
  pub color: Option<Option<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub checked: Option<bool>,
  #[serde(
    default,
    deserialize_with = "deserialize_some",
    skip_serializing_if = "Option::is_none"
  )]
  pub language: Option<Option<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub src: Option<String>,
  #[serde(
    default,
    deserialize_with = "deserialize_some",
    skip_serializing_if = "Option::is_none"
  )]
  pub width: Option<Option<u32>>,
  #[serde(
    default,
    deserialize_with = "deserialize_some",
    skip_serializing_if = "Option::is_none"
  )]
  pub height: Option<Option<u32>>,
  #[serde(
    default,
    deserialize_with = "deserialize_some",
    skip_serializing_if = "Option::is_none"
  )]
  pub caption: Option<Option<String>>,
}

impl BlockUpdate {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_value<T: Into<String>>(self, value: T) -> Self {
    Self {
      value: Some(value.into()),
      ..self
    }
  }

  pub fn with_text_type(self, text_type: TextType) -> Self {
    Self {
      text_type: Some(text_type),
      ..self
    }
  }

  pub fn with_checked(self, checked: bool) -> Self {
    Self {
      checked: Some(checked),
      ..self
    }
  }

  pub fn with_src<T: Into<String>>(self, src: T) -> Self {
    Self {
      src: Some(src.into()),
      ..self
    }
  }

  pub fn apply_to(self, kind: &mut BlockKind) {
    match kind {
      BlockKind::Text {
        text_type,
        value,
        color,
      } => {
        set_if_some(value, self.value);
        set_if_some(text_type, self.text_type);
        set_if_some(color, self.color);
      },
      BlockKind::Todo { value, checked } => {
        set_if_some(value, self.value);
        set_if_some(checked, self.checked);
      },
      BlockKind::Bullet { value } | BlockKind::Numbered { value } | BlockKind::Quote { value } => {
        set_if_some(value, self.value);
      },
      BlockKind::Code { value, language } => {
        set_if_some(value, self.value);
        set_if_some(language, self.language);
      },
      BlockKind::Divider => {},
      BlockKind::Image {
        src,
        width,
        height,
        caption,
      } => {
        set_if_some(src, self.src);
        set_if_some(width, self.width);
        set_if_some(height, self.height);
        set_if_some(caption, self.caption);
      },
      BlockKind::Video { src, width, height } => {
        set_if_some(src, self.src);
        set_if_some(width, self.width);
        set_if_some(height, self.height);
      },
    }
  }
}

fn set_if_some<T>(slot: &mut T, value: Option<T>) {
  if let Some(value) = value {
    *slot = value;
  }
}
