use super::{BinaryName, Error, Name};
use std::fmt::Display;
use std::iter::Peekable;
use std::str::Chars;

/// Primitive value types
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BaseType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
}

impl BaseType {
    fn from_char(c: char) -> Option<BaseType> {
        Some(match c {
            'B' => BaseType::Byte,
            'C' => BaseType::Char,
            'D' => BaseType::Double,
            'F' => BaseType::Float,
            'I' => BaseType::Int,
            'J' => BaseType::Long,
            'S' => BaseType::Short,
            'Z' => BaseType::Boolean,
            _ => return None,
        })
    }
}

/// Type of a parameter or return value
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum FieldType {
    Base(BaseType),
    Object(BinaryName),
    Array(Box<FieldType>),
}

/// Signature of a method
///
/// See <https://docs.oracle.com/javase/specs/jvms/se16/html/jvms-4.html#jvms-4.3.3>
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct MethodDescriptor {
    pub parameters: Vec<FieldType>,
    pub return_type: Option<FieldType>, // `None` is for `void`
}

impl MethodDescriptor {
    /// Parse a method descriptor such as `(JI)V`, rejecting any leftover input
    pub fn parse(source: &str) -> Result<MethodDescriptor, Error> {
        let mut parser = DescriptorParser {
            source,
            chars: source.chars().peekable(),
        };
        let descriptor = parser.method()?;
        match parser.chars.next() {
            None => Ok(descriptor),
            Some(c) => Err(parser.error(format!("unexpected leftover input '{}'", c))),
        }
    }
}

impl BinaryName {
    /// Object type descriptor (`L<binary name>;`), which is also how annotations are tagged
    pub fn descriptor(&self) -> String {
        format!("L{};", self.as_str())
    }
}

struct DescriptorParser<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
}

impl<'a> DescriptorParser<'a> {
    fn error(&self, msg: impl Display) -> Error {
        Error::BadDescriptor(format!("'{}': {}", self.source, msg))
    }

    fn method(&mut self) -> Result<MethodDescriptor, Error> {
        match self.chars.next() {
            Some('(') => (),
            _ => return Err(self.error("expected '(' to open the parameters")),
        }

        let mut parameters = vec![];
        while self.chars.next_if_eq(&')').is_none() {
            parameters.push(self.field_type()?);
        }

        let return_type = if self.chars.next_if_eq(&'V').is_some() {
            None
        } else {
            Some(self.field_type()?)
        };

        Ok(MethodDescriptor {
            parameters,
            return_type,
        })
    }

    fn field_type(&mut self) -> Result<FieldType, Error> {
        match self.chars.next() {
            Some('L') => self.class_name().map(FieldType::Object),
            Some('[') => Ok(FieldType::Array(Box::new(self.field_type()?))),
            Some(c) => BaseType::from_char(c)
                .map(FieldType::Base)
                .ok_or_else(|| self.error(format!("invalid type character '{}'", c))),
            None => Err(self.error("missing type")),
        }
    }

    fn class_name(&mut self) -> Result<BinaryName, Error> {
        let mut name = String::new();
        loop {
            match self.chars.next() {
                Some(';') => return BinaryName::from_string(name).map_err(|err| self.error(err)),
                Some(c) => name.push(c),
                None => return Err(self.error(format!("missing ';' after 'L{}'", name))),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_blocking_overloads() {
        let sleep = MethodDescriptor::parse("(JI)V").unwrap();
        assert_eq!(
            sleep.parameters,
            vec![FieldType::Base(BaseType::Long), FieldType::Base(BaseType::Int)]
        );
        assert_eq!(sleep.return_type, None);

        let join = MethodDescriptor::parse("()V").unwrap();
        assert!(join.parameters.is_empty());
    }

    #[test]
    fn parse_object_and_array_types() {
        let desc = MethodDescriptor::parse("([Ljava/lang/Object;[[I)Ljava/lang/Thread;").unwrap();
        assert_eq!(
            desc.parameters,
            vec![
                FieldType::Array(Box::new(FieldType::Object(BinaryName::OBJECT))),
                FieldType::Array(Box::new(FieldType::Array(Box::new(FieldType::Base(
                    BaseType::Int
                ))))),
            ]
        );
        assert_eq!(desc.return_type, Some(FieldType::Object(BinaryName::THREAD)));
    }

    #[test]
    fn reject_malformed_descriptors() {
        for source in ["J)V", "(J", "(Q)V", "(J)VV", "(Ljava/lang/Object)V", "(L;)V", "(J)"] {
            match MethodDescriptor::parse(source) {
                Err(Error::BadDescriptor(msg)) => assert!(msg.contains(source), "{}", msg),
                other => panic!("Expected '{}' to be rejected, got {:?}", source, other),
            }
        }
    }

    #[test]
    fn object_descriptor_of_binary_name() {
        assert_eq!(BinaryName::THREAD.descriptor(), "Ljava/lang/Thread;");
    }
}
