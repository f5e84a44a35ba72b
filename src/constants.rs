/// Default ratio used to initialize supply from an empty pool.
pub const DEFAULT_RATIO: u16 = 10_000;
