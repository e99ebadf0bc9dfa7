use crate::config::arch_config::{SignedWordType, WordType, XLEN};

pub fn sign_extend(value: WordType, from_bits: u32) -> WordType {
    let sign_bit = XLEN as u32 - from_bits;
    ((value << sign_bit) as SignedWordType >> sign_bit) as WordType
}

pub fn sign_extend_u32(value: u32) -> WordType {
    sign_extend(value as WordType, 32)
}

/// get the negative of given number of [`WordType`] in 2's complement.
#[allow(unused)]
pub fn negative_of(value: WordType) -> WordType {
    (!value).wrapping_add(1)
}

// ========================================
//  gen_name_list ["a1", "a2", "a3", ... ]
// ========================================

/// # Examples
/// ```
/// assert_eq!(gen_name_list!("a"; 0, 5), ["a0", "a1", "a2", "a3", "a4", "a5"])
/// ```
#[macro_export]
macro_rules! gen_name_list {
    ($base:literal; $begin: literal, $end: literal) => {
        seq_macro::seq!(N in $begin..= $end {
            [ #(concat!($base, stringify!(N)),) *]
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0x123, 12), 0x123);
        assert_eq!(sign_extend(0x7FF, 12), 0x7FF);
        assert_eq!(sign_extend(0xFFF, 12), !0 as WordType);
        assert_eq!(sign_extend(0xF0F, 12), (!0 - 0xF0) as WordType);
    }

    #[test]
    fn test_sign_extend_u32() {
        assert_eq!(sign_extend_u32(0x7fff_ffff), 0x7fff_ffff);
        assert_eq!(sign_extend_u32(0x8000_0000), 0xffff_ffff_8000_0000);
    }

    #[test]
    fn test_negative_of() {
        assert_eq!(negative_of(0), 0);
        assert_eq!(negative_of(1), !0 as WordType);
        assert_eq!(negative_of(2), (!0 - 1) as WordType);
    }

    #[test]
    fn test_gen_name_list() {
        assert_eq!(gen_name_list!("a"; 0, 5), ["a0", "a1", "a2", "a3", "a4", "a5"]);
    }
}
