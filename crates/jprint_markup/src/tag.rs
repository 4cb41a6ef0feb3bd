//! Opening and closing tag text.

/// One element wrapped around a decorated sub-tree.
///
/// Attributes are written in a fixed order (`id`, `name`, `type`, `class`),
/// each followed by a space, so `<span type='class' >` is the shape of a tag
/// with only a type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag<'a> {
    element: &'a str,
    id: Option<&'a str>,
    name: Option<&'a str>,
    kind: Option<&'a str>,
    classes: Vec<&'a str>,
}

impl<'a> Tag<'a> {
    pub fn new(element: &'a str) -> Self {
        Self {
            element,
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// The `type` attribute.
    pub fn kind(mut self, kind: &'a str) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn classes(mut self, classes: impl IntoIterator<Item = &'a str>) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn open(&self) -> String {
        let mut out = String::with_capacity(32);
        out.push('<');
        out.push_str(self.element);
        out.push(' ');
        for (attr, value) in [("id", self.id), ("name", self.name), ("type", self.kind)] {
            if let Some(value) = value {
                push_attr(&mut out, attr, value);
            }
        }
        if !self.classes.is_empty() {
            push_attr(&mut out, "class", &self.classes.join(" "));
        }
        out.push('>');
        out
    }

    pub fn close(&self) -> String {
        format!("</{}>", self.element)
    }
}

fn push_attr(out: &mut String, attr: &str, value: &str) {
    out.push_str(attr);
    out.push_str("='");
    out.push_str(value);
    out.push_str("' ");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_only() {
        let tag = Tag::new("span").kind("class_declare");
        assert_eq!(tag.open(), "<span type='class_declare' >");
        assert_eq!(tag.close(), "</span>");
    }

    #[test]
    fn test_bare_tag() {
        assert_eq!(Tag::new("code").open(), "<code >");
    }

    #[test]
    fn test_attribute_order() {
        let tag = Tag::new("a")
            .class("hl")
            .kind("new")
            .name("n")
            .id("x1")
            .classes(["strong", "dim"]);
        assert_eq!(tag.open(), "<a id='x1' name='n' type='new' class='hl strong dim' >");
    }

    #[test]
    fn test_name_without_id() {
        assert_eq!(Tag::new("span").name("only").open(), "<span name='only' >");
    }
}
