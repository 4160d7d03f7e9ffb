/// A value of the expression language. Used both as the literal payload of tokens and as the
/// result of evaluating an expression.
///
/// `Display` gives the canonical text of a value: `nil`, `true`/`false`, numbers in their
/// shortest form (`7`, `0.5`) and strings without quotes. That text is what gets printed for a
/// result and what `+` appends when only one side is a string.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum Value {
    #[display(fmt = "nil")]
    Nil,
    Boolean(bool),
    Number(f64),
    Str(String),
}

impl Value {
    /// Only `nil` and `false` are falsey, everything else (including `0` and `""`) is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false))
    }

    pub fn is_falsey(&self) -> bool {
        !self.is_truthy()
    }

    /// Equality as seen by `==`. Values of different types are never equal, numbers follow
    /// IEEE-754 so `NaN` is not even equal to itself.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Nil, _) | (_, Value::Nil) => false,
            (a, b) => a == b,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn negate(&self) -> Option<Value> {
        self.as_number().map(|n| Value::Number(-n))
    }

    pub fn not(&self) -> Value {
        Value::Boolean(self.is_falsey())
    }

    /// `+` is overloaded: numbers are summed, and as soon as one side is a string the other
    /// side is converted to its display text and appended.
    pub fn add(&self, other: &Value) -> Option<Value> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Some(Value::Number(a + b)),
            (Value::Str(a), Value::Str(b)) => Some(Value::Str(format!("{a}{b}"))),
            (Value::Str(a), b) => Some(Value::Str(format!("{a}{b}"))),
            (a, Value::Str(b)) => Some(Value::Str(format!("{a}{b}"))),
            _ => None,
        }
    }

    pub fn subtract(&self, other: &Value) -> Option<Value> {
        self.numeric(other, |a, b| Value::Number(a - b))
    }

    pub fn multiply(&self, other: &Value) -> Option<Value> {
        self.numeric(other, |a, b| Value::Number(a * b))
    }

    /// Plain IEEE division, checking for a zero divisor is up to the caller.
    pub fn divide(&self, other: &Value) -> Option<Value> {
        self.numeric(other, |a, b| Value::Number(a / b))
    }

    /// Floating point remainder, the sign follows the dividend (like C's `fmod`).
    pub fn remainder(&self, other: &Value) -> Option<Value> {
        self.numeric(other, |a, b| Value::Number(a % b))
    }

    pub fn less_than(&self, other: &Value) -> Option<Value> {
        self.numeric(other, |a, b| Value::Boolean(a < b))
    }

    pub fn less_equal(&self, other: &Value) -> Option<Value> {
        self.numeric(other, |a, b| Value::Boolean(a <= b))
    }

    pub fn greater_than(&self, other: &Value) -> Option<Value> {
        self.numeric(other, |a, b| Value::Boolean(a > b))
    }

    pub fn greater_equal(&self, other: &Value) -> Option<Value> {
        self.numeric(other, |a, b| Value::Boolean(a >= b))
    }

    fn numeric(&self, other: &Value, op: impl FnOnce(f64, f64) -> Value) -> Option<Value> {
        Some(op(self.as_number()?, other.as_number()?))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
