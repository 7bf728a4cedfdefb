use nft_meta_model::RowShape;

/// Field delimiter of the attribute table.
pub const DELIMITER: u8 = b';';

/// Options for reading the attribute table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// How rows whose field count differs from the header are handled.
    pub row_shape: RowShape,
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_row_shape(mut self, row_shape: RowShape) -> Self {
        self.row_shape = row_shape;
        self
    }

    /// Shorthand for [`RowShape::Strict`].
    #[must_use]
    pub fn strict(self) -> Self {
        self.with_row_shape(RowShape::Strict)
    }
}
