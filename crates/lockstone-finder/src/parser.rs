use std::hash::Hash;
use std::sync::Arc;

use lockstone_world::SignRef;

/// Turns sign text into a protection record.
///
/// Returning `None` means the sign is not a protection sign; finders skip it.
pub trait SignParser {
    type Sign: Clone + Eq + Hash;

    fn parse_sign(&self, sign: &SignRef<'_>) -> Option<Self::Sign>;
}

impl<P: SignParser + ?Sized> SignParser for &P {
    type Sign = P::Sign;

    fn parse_sign(&self, sign: &SignRef<'_>) -> Option<Self::Sign> {
        (**self).parse_sign(sign)
    }
}

impl<P: SignParser + ?Sized> SignParser for Arc<P> {
    type Sign = P::Sign;

    fn parse_sign(&self, sign: &SignRef<'_>) -> Option<Self::Sign> {
        (**self).parse_sign(sign)
    }
}
