#[derive(Debug, Clone, Eq)]
pub struct FieldName<'b>(pub(crate) &'b str);

impl<'b> FieldName<'b> {
    #[inline]
    pub fn new(name: &'b str) -> Self {
        Self(name)
    }

    #[inline]
    pub fn as_str<'s>(&'s self) -> &'b str
    where
        'b: 's,
    {
        self.0
    }

    #[inline]
    pub fn as_bytes<'s>(&'s self) -> &'b [u8]
    where
        'b: 's,
    {
        self.0.as_bytes()
    }
}

impl<'b> From<&'b str> for FieldName<'b> {
    #[inline]
    fn from(name: &'b str) -> Self {
        Self(name)
    }
}

impl<'a, 'b> PartialEq<FieldName<'a>> for FieldName<'b> {
    #[inline]
    fn eq(&self, other: &FieldName<'a>) -> bool {
        self.0.eq_ignore_ascii_case(other.0)
    }
}

impl<'a, 'b> PartialEq<&'a str> for FieldName<'b> {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl<'a, 'b> PartialEq<&'a [u8]> for FieldName<'b> {
    #[inline]
    fn eq(&self, other: &&'a [u8]) -> bool {
        self.0.as_bytes().eq_ignore_ascii_case(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_eq() {
        let name = FieldName::new("Content-Type");

        assert_eq!(name, name.clone());
        assert_eq!(name, "content-typE");
        assert_eq!(name, b"CoNtEnT-tYpE".as_ref());
        assert_eq!(name.as_str(), "Content-Type");
    }
}
