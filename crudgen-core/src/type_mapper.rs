//! Type mapping between database column types and target-language types.

/// Language-agnostic classification of a database column type.
///
/// Use a [`TypeMapper`] to convert to language-specific type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Int,
    BigInt,
    Text,
    Bool,
    DateTime,
    Float,
}

impl SqlType {
    /// Classify a raw database type by case-insensitive substring matching.
    ///
    /// Precedence is fixed: integer, text, boolean, date-time, numeric.
    /// Anything unrecognised is treated as text.
    pub fn classify(raw_type: &str) -> Self {
        let ty = raw_type.to_lowercase();
        let has = |needle: &str| ty.contains(needle);

        if has("int") {
            if has("big") {
                SqlType::BigInt
            } else {
                SqlType::Int
            }
        } else if has("varchar") || has("text") || has("char") {
            SqlType::Text
        } else if has("bool") {
            SqlType::Bool
        } else if has("timestamp") || has("date") {
            SqlType::DateTime
        } else if has("numeric") || has("decimal") {
            SqlType::Float
        } else {
            SqlType::Text
        }
    }
}

/// Trait for mapping column types to language-specific type strings.
pub trait TypeMapper {
    /// File extension (without dot) used for fallback file names
    fn file_extension(&self) -> &'static str;

    /// Map a classified column type to a language-specific type string
    fn map_sql_type(&self, sql_type: SqlType) -> &'static str;

    /// Wrap a type in the language's nullable representation
    fn wrap_nullable(&self, ty: &str) -> String;

    /// Types that are never wrapped even when the column is nullable
    fn is_nullable_exempt(&self, sql_type: SqlType) -> bool {
        sql_type == SqlType::Text
    }

    /// Map a raw column type and its nullability to a type string.
    fn map_column(&self, raw_type: &str, nullable: bool) -> String {
        let sql_type = SqlType::classify(raw_type);
        let ty = self.map_sql_type(sql_type);
        if nullable && !self.is_nullable_exempt(sql_type) {
            self.wrap_nullable(ty)
        } else {
            ty.to_string()
        }
    }
}

/// Go type mapper implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn map_sql_type(&self, sql_type: SqlType) -> &'static str {
        match sql_type {
            SqlType::Int => "int",
            SqlType::BigInt => "int64",
            SqlType::Text => "string",
            SqlType::Bool => "bool",
            SqlType::DateTime => "time.Time",
            SqlType::Float => "float64",
        }
    }

    fn wrap_nullable(&self, ty: &str) -> String {
        format!("*{}", ty)
    }
}
