//! Parser for the MLIR textual syntax of the [`Type`]s and [`Attribute`]s supported by this crate.

use std::str::FromStr;

use thiserror::Error;

use crate::{
    AnyQuantizedType, Attribute, AttributeError, CalibratedQuantizedType, Context, DenseElementsAttribute,
    FloatAttribute, FloatType, IntegerAttribute, IntegerType, Location, QuantizedStorage, QuantizedType,
    QuantizedTypeError, Size, TensorType, Type, UniformQuantizedPerAxisType, UniformQuantizedType,
    UnrankedTensorType, VectorType, VectorTypeDimension,
};

/// Error returned when parsing a [`Type`] or an [`Attribute`] fails. All offsets are byte offsets into the source.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("expected {expected} at offset {offset}")]
    Expected { offset: usize, expected: &'static str },

    #[error("unexpected trailing characters at offset {offset}")]
    TrailingCharacters { offset: usize },

    #[error("unknown type '{keyword}' at offset {offset}")]
    UnknownType { offset: usize, keyword: String },

    #[error("invalid numeric literal '{literal}' at offset {offset}")]
    InvalidNumber { offset: usize, literal: String },

    #[error("invalid quantized type at offset {offset}: {source}")]
    InvalidQuantizedType { offset: usize, source: QuantizedTypeError },

    #[error("invalid attribute at offset {offset}: {source}")]
    InvalidAttribute { offset: usize, source: AttributeError },

    #[error("dense literal at offset {offset} does not match the shape of '{shaped_type}'")]
    DenseLiteralShapeMismatch { offset: usize, shaped_type: Type },
}

/// Numeric literal.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(value) => *value as f64,
            Self::Float(value) => *value,
        }
    }

    fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(_) => None,
        }
    }
}

/// Literal payload of a `dense<...>` attribute.
enum DenseLiteral {
    Number(Number),
    List(Vec<DenseLiteral>),
}

fn flatten_dense_literal(literal: &DenseLiteral, dimensions: &[usize], numbers: &mut Vec<Number>) -> bool {
    match (literal, dimensions.split_first()) {
        (DenseLiteral::Number(number), None) => {
            numbers.push(*number);
            true
        }
        (DenseLiteral::List(elements), Some((size, inner_dimensions))) if elements.len() == *size => {
            elements.iter().all(|element| flatten_dense_literal(element, inner_dimensions, numbers))
        }
        _ => false,
    }
}

fn collect_dense_literal_leaves(literal: &DenseLiteral, numbers: &mut Vec<Number>) {
    match literal {
        DenseLiteral::Number(number) => numbers.push(*number),
        DenseLiteral::List(elements) => {
            elements.iter().for_each(|element| collect_dense_literal_leaves(element, numbers));
        }
    }
}

/// Recursive descent parser over a source string.
struct Parser<'s> {
    source: &'s str,
    offset: usize,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str) -> Self {
        Self { source, offset: 0 }
    }

    fn remaining(&self) -> &'s str {
        &self.source[self.offset..]
    }

    fn skip_whitespace(&mut self) {
        let remaining = self.remaining();
        self.offset += remaining.len() - remaining.trim_start().len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.remaining().chars().next()
    }

    fn consume(&mut self, token: &str) -> bool {
        self.skip_whitespace();
        if self.remaining().starts_with(token) {
            self.offset += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str, expected: &'static str) -> Result<(), ParseError> {
        if self.consume(token) { Ok(()) } else { Err(self.error(expected)) }
    }

    fn error(&self, expected: &'static str) -> ParseError {
        ParseError::Expected { offset: self.offset, expected }
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.offset == self.source.len() {
            Ok(())
        } else {
            Err(ParseError::TrailingCharacters { offset: self.offset })
        }
    }

    /// Consumes a (potentially empty) keyword made of ASCII alphanumeric characters and underscores.
    fn keyword(&mut self) -> &'s str {
        self.skip_whitespace();
        let remaining = self.remaining();
        let length = remaining.find(|character: char| !character.is_ascii_alphanumeric() && character != '_');
        let length = length.unwrap_or(remaining.len());
        self.offset += length;
        &remaining[..length]
    }

    /// Returns the next keyword without consuming it.
    fn peek_keyword(&mut self) -> &'s str {
        let offset = self.offset;
        let keyword = self.keyword();
        self.offset = offset;
        keyword
    }

    fn unsigned(&mut self) -> Result<usize, ParseError> {
        self.skip_whitespace();
        let offset = self.offset;
        let remaining = self.remaining();
        let length = remaining.find(|character: char| !character.is_ascii_digit()).unwrap_or(remaining.len());
        if length == 0 {
            return Err(self.error("unsigned integer literal"));
        }
        self.offset += length;
        remaining[..length]
            .parse()
            .map_err(|_| ParseError::InvalidNumber { offset, literal: remaining[..length].to_string() })
    }

    fn number(&mut self) -> Result<Number, ParseError> {
        self.skip_whitespace();
        let offset = self.offset;
        let bytes = self.remaining().as_bytes();
        let mut length = 0;
        let mut is_float = false;
        let digits =
            |bytes: &[u8], start: usize| bytes[start..].iter().take_while(|byte| byte.is_ascii_digit()).count();
        if matches!(bytes.first(), Some(b'-' | b'+')) {
            length += 1;
        }
        let integer_digits = digits(bytes, length);
        if integer_digits == 0 {
            return Err(self.error("numeric literal"));
        }
        length += integer_digits;
        if bytes.get(length) == Some(&b'.') {
            is_float = true;
            length += 1;
            length += digits(bytes, length);
        }
        if matches!(bytes.get(length), Some(b'e' | b'E')) {
            let mut exponent_length = 1;
            if matches!(bytes.get(length + 1), Some(b'-' | b'+')) {
                exponent_length += 1;
            }
            let exponent_digits = digits(bytes, length + exponent_length);
            if exponent_digits > 0 {
                is_float = true;
                length += exponent_length + exponent_digits;
            }
        }
        let literal = &self.remaining()[..length];
        self.offset += length;
        let invalid = || ParseError::InvalidNumber { offset, literal: literal.to_string() };
        if is_float {
            literal.parse().map(Number::Float).map_err(|_| invalid())
        } else {
            literal.parse().map(Number::Integer).map_err(|_| invalid())
        }
    }

    fn integer(&mut self) -> Result<i64, ParseError> {
        let offset = self.offset;
        match self.number()? {
            Number::Integer(value) => Ok(value),
            Number::Float(_) => Err(ParseError::Expected { offset, expected: "integer literal" }),
        }
    }

    fn float(&mut self) -> Result<f64, ParseError> {
        self.number().map(|number| number.as_f64())
    }

    fn string(&mut self) -> Result<String, ParseError> {
        self.expect("\"", "string literal")?;
        let bytes = self.remaining().as_bytes();
        let mut string = Vec::new();
        let mut index = 0;
        loop {
            match bytes.get(index) {
                None => {
                    self.offset += index;
                    return Err(self.error("closing '\"'"));
                }
                Some(b'"') => break,
                Some(b'\\') => {
                    match (bytes.get(index + 1), bytes.get(index + 2)) {
                        (Some(b'"'), _) => string.push(b'"'),
                        (Some(b'\\'), _) => string.push(b'\\'),
                        (Some(b'n'), _) => string.push(b'\n'),
                        (Some(b't'), _) => string.push(b'\t'),
                        (Some(high), Some(low)) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit() => {
                            let digits = [*high, *low];
                            let digits = std::str::from_utf8(&digits).map_err(|_| self.error("escape sequence"))?;
                            string.push(u8::from_str_radix(digits, 16).map_err(|_| self.error("escape sequence"))?);
                            index += 1;
                        }
                        _ => {
                            self.offset += index;
                            return Err(self.error("escape sequence"));
                        }
                    }
                    index += 2;
                }
                Some(byte) => {
                    string.push(*byte);
                    index += 1;
                }
            }
        }
        self.offset += index + 1;
        String::from_utf8(string).map_err(|_| self.error("UTF-8 string literal"))
    }

    fn float_type(&mut self) -> Result<FloatType, ParseError> {
        let offset = self.offset;
        FloatType::from_keyword(self.keyword()).ok_or(ParseError::Expected { offset, expected: "floating-point type" })
    }

    fn parse_type(&mut self) -> Result<Type, ParseError> {
        self.skip_whitespace();
        if self.consume("!quant.") {
            return self.quantized_type().map(Type::Quantized);
        }
        let offset = self.offset;
        let keyword = self.keyword();
        match keyword {
            "" => Err(self.error("type")),
            "index" => Ok(Type::Index),
            "none" => Ok(Type::None),
            "tensor" => self.tensor_type(),
            "vector" => self.vector_type(),
            _ => {
                if let Some(float_type) = FloatType::from_keyword(keyword) {
                    return Ok(Type::Float(float_type));
                }
                let integer_type = if let Some(width) = keyword.strip_prefix("si") {
                    width.parse().ok().map(IntegerType::signed)
                } else if let Some(width) = keyword.strip_prefix("ui") {
                    width.parse().ok().map(IntegerType::unsigned)
                } else if let Some(width) = keyword.strip_prefix('i') {
                    width.parse().ok().map(IntegerType::signless)
                } else {
                    None
                };
                integer_type
                    .map(Type::Integer)
                    .ok_or_else(|| ParseError::UnknownType { offset, keyword: keyword.to_string() })
            }
        }
    }

    fn tensor_type(&mut self) -> Result<Type, ParseError> {
        self.expect("<", "'<'")?;
        if self.consume("*") {
            self.expect("x", "'x'")?;
            let element_type = self.parse_type()?;
            self.expect(">", "'>'")?;
            return Ok(Type::UnrankedTensor(UnrankedTensorType::new(element_type)));
        }
        let mut shape = Vec::new();
        loop {
            match self.peek() {
                Some('?') => {
                    self.consume("?");
                    shape.push(Size::Dynamic);
                }
                Some(character) if character.is_ascii_digit() => shape.push(Size::Static(self.unsigned()?)),
                _ => break,
            }
            self.expect("x", "'x'")?;
        }
        let element_type = self.parse_type()?;
        self.expect(">", "'>'")?;
        Ok(Type::Tensor(TensorType::new(&shape, element_type)))
    }

    fn vector_type(&mut self) -> Result<Type, ParseError> {
        self.expect("<", "'<'")?;
        let mut dimensions = Vec::new();
        loop {
            match self.peek() {
                Some('[') => {
                    self.consume("[");
                    dimensions.push(VectorTypeDimension::Scalable(self.unsigned()?));
                    self.expect("]", "']'")?;
                }
                Some(character) if character.is_ascii_digit() => {
                    dimensions.push(VectorTypeDimension::Fixed(self.unsigned()?));
                }
                _ => break,
            }
            self.expect("x", "'x'")?;
        }
        let offset = self.offset;
        let element_type = self.parse_type()?;
        self.expect(">", "'>'")?;
        VectorType::new(&dimensions, element_type)
            .map(Type::Vector)
            .ok_or(ParseError::Expected { offset, expected: "vector dimension" })
    }

    fn quantized_storage(&mut self) -> Result<QuantizedStorage, ParseError> {
        let offset = self.offset;
        let keyword = self.keyword();
        let storage = match keyword.split_at_checked(1) {
            Some(("i", width)) => width.parse().ok().map(QuantizedStorage::signed),
            Some(("u", width)) => width.parse().ok().map(QuantizedStorage::unsigned),
            _ => None,
        };
        let storage = storage.ok_or(ParseError::Expected { offset, expected: "quantized storage type" })?;
        if self.consume("<") {
            let minimum = self.integer()?;
            self.expect(":", "':'")?;
            let maximum = self.integer()?;
            self.expect(">", "'>'")?;
            return storage
                .with_range(minimum, maximum)
                .map_err(|source| ParseError::InvalidQuantizedType { offset, source });
        }
        Ok(storage)
    }

    fn scale_and_zero_point(&mut self) -> Result<(f64, i64), ParseError> {
        let scale = self.float()?;
        let zero_point = if self.consume(":") { self.integer()? } else { 0 };
        Ok((scale, zero_point))
    }

    fn quantized_type(&mut self) -> Result<QuantizedType, ParseError> {
        let offset = self.offset;
        let invalid = |source: QuantizedTypeError| ParseError::InvalidQuantizedType { offset, source };
        match self.keyword() {
            "any" => {
                self.expect("<", "'<'")?;
                let storage = self.quantized_storage()?;
                let expressed_type = if self.consume(":") { Some(self.float_type()?) } else { None };
                self.expect(">", "'>'")?;
                AnyQuantizedType::new(storage, expressed_type).map(QuantizedType::Any).map_err(invalid)
            }
            "uniform" => {
                self.expect("<", "'<'")?;
                let storage = self.quantized_storage()?;
                self.expect(":", "':'")?;
                let expressed_type = self.float_type()?;
                if self.consume(":") {
                    let quantized_dimension = self.unsigned()?;
                    self.expect(",", "','")?;
                    self.expect("{", "'{'")?;
                    let mut scales = Vec::new();
                    let mut zero_points = Vec::new();
                    if !self.consume("}") {
                        loop {
                            let (scale, zero_point) = self.scale_and_zero_point()?;
                            scales.push(scale);
                            zero_points.push(zero_point);
                            if !self.consume(",") {
                                break;
                            }
                        }
                        self.expect("}", "'}'")?;
                    }
                    self.expect(">", "'>'")?;
                    UniformQuantizedPerAxisType::new(
                        storage,
                        expressed_type,
                        &scales,
                        &zero_points,
                        quantized_dimension,
                    )
                    .map(QuantizedType::UniformPerAxis)
                    .map_err(invalid)
                } else {
                    self.expect(",", "','")?;
                    let (scale, zero_point) = self.scale_and_zero_point()?;
                    self.expect(">", "'>'")?;
                    UniformQuantizedType::new(storage, expressed_type, scale, zero_point)
                        .map(QuantizedType::Uniform)
                        .map_err(invalid)
                }
            }
            "calibrated" => {
                self.expect("<", "'<'")?;
                let expressed_type = self.float_type()?;
                self.expect("<", "'<'")?;
                let minimum = self.float()?;
                self.expect(":", "':'")?;
                let maximum = self.float()?;
                self.expect(">", "'>'")?;
                self.expect(">", "'>'")?;
                CalibratedQuantizedType::new(expressed_type, minimum, maximum)
                    .map(QuantizedType::Calibrated)
                    .map_err(invalid)
            }
            _ => Err(ParseError::Expected { offset, expected: "'any', 'uniform', or 'calibrated'" }),
        }
    }

    fn parse_attribute(&mut self) -> Result<Attribute, ParseError> {
        match self.peek() {
            None => Err(self.error("attribute")),
            Some('"') => self.string().map(Attribute::String),
            Some('[') => {
                self.consume("[");
                let mut elements = Vec::new();
                if !self.consume("]") {
                    loop {
                        elements.push(self.parse_attribute()?);
                        if !self.consume(",") {
                            break;
                        }
                    }
                    self.expect("]", "']'")?;
                }
                Ok(Attribute::Array(elements))
            }
            Some(character) if character.is_ascii_digit() || character == '-' || character == '+' => {
                self.numeric_attribute()
            }
            Some(_) => match self.peek_keyword() {
                "unit" => {
                    self.keyword();
                    Ok(Attribute::Unit)
                }
                "true" | "false" => Ok(Attribute::Boolean(self.keyword() == "true")),
                "dense" => {
                    self.keyword();
                    self.dense_elements_attribute()
                }
                _ => self.parse_type().map(Attribute::Type),
            },
        }
    }

    fn numeric_attribute(&mut self) -> Result<Attribute, ParseError> {
        let offset = self.offset;
        let number = self.number()?;
        let attribute_type = if self.consume(":") { Some(self.parse_type()?) } else { None };
        let invalid = |source: AttributeError| ParseError::InvalidAttribute { offset, source };
        match (number, attribute_type) {
            (Number::Integer(value), None) => Ok(Attribute::Integer(IntegerAttribute::i64(value))),
            (Number::Float(value), None) => Ok(Attribute::Float(FloatAttribute::new(FloatType::Float64, value))),
            (number, Some(Type::Float(float_type))) => {
                Ok(Attribute::Float(FloatAttribute::new(float_type, number.as_f64())))
            }
            (Number::Integer(value), Some(attribute_type)) => {
                IntegerAttribute::new(value, attribute_type).map(Attribute::Integer).map_err(invalid)
            }
            (Number::Float(_), Some(_)) => Err(ParseError::Expected { offset, expected: "integer literal" }),
        }
    }

    fn dense_literal(&mut self) -> Result<DenseLiteral, ParseError> {
        if !self.consume("[") {
            return self.number().map(DenseLiteral::Number);
        }
        let mut elements = Vec::new();
        if !self.consume("]") {
            loop {
                elements.push(self.dense_literal()?);
                if !self.consume(",") {
                    break;
                }
            }
            self.expect("]", "']'")?;
        }
        Ok(DenseLiteral::List(elements))
    }

    fn dense_elements_attribute(&mut self) -> Result<Attribute, ParseError> {
        let offset = self.offset;
        self.expect("<", "'<'")?;
        let literal = if self.consume(">") {
            None
        } else {
            let literal = self.dense_literal()?;
            self.expect(">", "'>'")?;
            Some(literal)
        };
        self.expect(":", "':'")?;
        let shaped_type = self.parse_type()?;

        let mut numbers = Vec::new();
        match &literal {
            None => {}
            Some(DenseLiteral::Number(number)) => numbers.push(*number),
            Some(literal) => {
                let dimensions =
                    shaped_type.shape().and_then(|shape| shape.iter().map(Size::value).collect::<Option<Vec<_>>>());
                match dimensions {
                    Some(dimensions) => {
                        if !flatten_dense_literal(literal, &dimensions, &mut numbers) {
                            return Err(ParseError::DenseLiteralShapeMismatch { offset, shaped_type });
                        }
                    }
                    None => collect_dense_literal_leaves(literal, &mut numbers),
                }
            }
        }

        let floats = numbers.iter().map(Number::as_f64).collect::<Vec<_>>();
        let integers = numbers.iter().map(Number::as_integer).collect::<Option<Vec<_>>>();
        let attribute = match (shaped_type.element_type(), integers) {
            (Some(Type::Float(_)), _) | (_, None) => DenseElementsAttribute::floats(shaped_type, &floats),
            (_, Some(integers)) => DenseElementsAttribute::integers(shaped_type, &integers),
        };
        attribute.map(Attribute::DenseElements).map_err(|source| ParseError::InvalidAttribute { offset, source })
    }
}

impl FromStr for Type {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(source);
        let parsed = parser.parse_type()?;
        parser.finish()?;
        Ok(parsed)
    }
}

impl FromStr for Attribute {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(source);
        let parsed = parser.parse_attribute()?;
        parser.finish()?;
        Ok(parsed)
    }
}

impl Context {
    /// Parses a [`Type`] from its MLIR textual representation. On failure, an error diagnostic is emitted through
    /// this [`Context`] and [`None`] is returned.
    pub fn parse_type(&self, source: &str) -> Option<Type> {
        source.parse().map_err(|error: ParseError| self.emit_error(Location::unknown(), error.to_string())).ok()
    }

    /// Parses an [`Attribute`] from its MLIR textual representation. On failure, an error diagnostic is emitted
    /// through this [`Context`] and [`None`] is returned.
    pub fn parse_attribute(&self, source: &str) -> Option<Attribute> {
        source.parse().map_err(|error: ParseError| self.emit_error(Location::unknown(), error.to_string())).ok()
    }
}
