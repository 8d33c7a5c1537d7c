//! Chain-agnostic account identity.

/// A generic account identity: a liquidity provider, a swapper, the fee
/// recipient, or the pool itself.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// valid identities, so construction is infallible. Identities are opaque
/// to the pool — it only ever compares them and hands them to the ledger
/// capabilities.
///
/// # Examples
///
/// ```
/// use cpswap::domain::AccountId;
///
/// let lp = AccountId::from_bytes([7u8; 32]);
/// assert_eq!(lp.as_bytes(), [7u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero identity.
    ///
    /// Useful as a sentinel in tests; the pool itself never special-cases
    /// it.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }
}
