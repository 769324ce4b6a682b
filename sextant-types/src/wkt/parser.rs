use crate::error::GeometryError;
use crate::geometry::MAX_NESTING_DEPTH;
use crate::geometry_type::GeometryType;

const EMPTY: &str = "EMPTY";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Word(&'a str),
    Number(&'a str),
    LeftParen,
    RightParen,
    Comma,
    End,
}

/// Cursor over WKT text.
///
/// Whitespace between tokens is skipped. Keywords are matched case insensitively.
#[derive(Debug)]
pub struct WktParser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> WktParser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn error(&self, expected: &str) -> GeometryError {
        GeometryError::malformed_wkt(self.rest(), expected)
    }

    /// Skips whitespace and returns the next token with its length in bytes.
    fn scan(&mut self) -> Result<(Token<'a>, usize), GeometryError> {
        self.pos = self.input.len() - self.rest().trim_start().len();
        let rest = self.rest();

        let Some(first) = rest.chars().next() else {
            return Ok((Token::End, 0));
        };

        let token = match first {
            '(' => (Token::LeftParen, 1),
            ')' => (Token::RightParen, 1),
            ',' => (Token::Comma, 1),
            c if c.is_ascii_alphabetic() => {
                let len = token_len(rest, |c| c.is_ascii_alphanumeric() || c == '_');
                (Token::Word(&rest[..len]), len)
            }
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                let len = token_len(rest, |c| {
                    c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.')
                });
                (Token::Number(&rest[..len]), len)
            }
            _ => return Err(self.error("a number, a keyword, `(`, `)` or `,`")),
        };

        Ok(token)
    }

    fn peek(&mut self) -> Result<Token<'a>, GeometryError> {
        Ok(self.scan()?.0)
    }

    fn advance(&mut self) -> Result<Token<'a>, GeometryError> {
        let (token, len) = self.scan()?;
        self.pos += len;
        Ok(token)
    }

    fn expect(&mut self, token: Token<'static>, expected: &str) -> Result<(), GeometryError> {
        if self.peek()? == token {
            self.advance()?;
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    pub(crate) fn left_paren(&mut self) -> Result<(), GeometryError> {
        self.expect(Token::LeftParen, "`(`")
    }

    pub(crate) fn right_paren(&mut self) -> Result<(), GeometryError> {
        self.expect(Token::RightParen, "`)`")
    }

    pub(crate) fn at_left_paren(&mut self) -> Result<bool, GeometryError> {
        Ok(self.peek()? == Token::LeftParen)
    }

    /// Consumes a geometry keyword.
    pub(crate) fn read_keyword(&mut self) -> Result<GeometryType, GeometryError> {
        const EXPECTED: &str = "a geometry keyword such as POINT or POLYGON";

        let Token::Word(word) = self.peek()? else {
            return Err(self.error(EXPECTED));
        };
        let geometry_type =
            GeometryType::from_wkt_keyword(word).ok_or_else(|| self.error(EXPECTED))?;
        self.advance()?;

        Ok(geometry_type)
    }

    /// Fails if the keyword that was read does not match the type being constructed.
    pub(crate) fn expect_type(
        &self,
        expected: GeometryType,
        found: GeometryType,
    ) -> Result<(), GeometryError> {
        if expected == found {
            Ok(())
        } else {
            Err(GeometryError::malformed_wkt(
                self.input,
                format!(
                    "{} geometry, got {}",
                    expected.wkt_keyword(),
                    found.wkt_keyword()
                ),
            ))
        }
    }

    /// Consumes a finite number.
    pub(crate) fn read_number(&mut self) -> Result<f64, GeometryError> {
        let Token::Number(text) = self.peek()? else {
            return Err(self.error("a number"));
        };
        let value = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.error("a number"))?;
        self.advance()?;

        Ok(value)
    }

    /// Consumes a parenthesized comma separated list of items, or the `EMPTY` keyword.
    pub(crate) fn read_list<T>(
        &mut self,
        mut read_item: impl FnMut(&mut Self) -> Result<T, GeometryError>,
    ) -> Result<Vec<T>, GeometryError> {
        if let Token::Word(word) = self.peek()? {
            if word.eq_ignore_ascii_case(EMPTY) {
                self.advance()?;
                return Ok(Vec::new());
            }
        }

        self.left_paren()?;
        let mut items = Vec::new();
        if self.peek()? == Token::RightParen {
            self.advance()?;
            return Ok(items);
        }

        loop {
            items.push(read_item(self)?);
            match self.peek()? {
                Token::Comma => {
                    self.advance()?;
                }
                Token::RightParen => {
                    self.advance()?;
                    return Ok(items);
                }
                _ => return Err(self.error("`,` or `)`")),
            }
        }
    }

    /// Runs `read` one nesting level deeper, failing past [`MAX_NESTING_DEPTH`] levels.
    pub(crate) fn nested<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T, GeometryError>,
    ) -> Result<T, GeometryError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(&format!(
                "at most {MAX_NESTING_DEPTH} levels of nested geometries"
            )));
        }

        self.depth += 1;
        let result = read(self);
        self.depth -= 1;

        result
    }

    /// Fails if anything but whitespace is left.
    pub(crate) fn finish(&mut self) -> Result<(), GeometryError> {
        match self.peek()? {
            Token::End => Ok(()),
            _ => Err(self.error("end of input")),
        }
    }
}

fn token_len(s: &str, is_token_char: impl Fn(char) -> bool) -> usize {
    s.find(|c: char| !is_token_char(c)).unwrap_or(s.len())
}
