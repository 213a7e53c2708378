bitflags::bitflags! {
    /// The flag word of a cookie record.
    ///
    /// Only [`SECURE`](Flags::SECURE) and [`HTTP_ONLY`](Flags::HTTP_ONLY)
    /// have a known meaning. Bits the format sets for reasons nobody has
    /// documented are kept, so a decoded cookie encodes back to the same flag
    /// word:
    ///
    /// ```rust
    /// use binarycookies::Flags;
    ///
    /// let flags = Flags::from_bits_retain(0x8000_0005);
    /// assert!(flags.contains(Flags::SECURE | Flags::HTTP_ONLY));
    /// assert_eq!(flags.bits(), 0x8000_0005);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// The cookie is only sent over secure connections.
        const SECURE = 1;
        /// The cookie is hidden from scripts.
        const HTTP_ONLY = 1 << 2;
        /// Set by Apple's writer; meaning unknown.
        const UNKNOWN_1 = 1 << 3;
        /// Set by Apple's writer; meaning unknown.
        const UNKNOWN_2 = 1 << 4;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

impl Flags {
    /// The bits of `self` that none of the named flags cover.
    pub fn unknown(&self) -> u32 {
        self.bits() & !Flags::all().bits()
    }
}
