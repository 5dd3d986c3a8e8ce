//! Decoding of the `/P` permission bit flags (ISO 32000-1 Table 22).

/// The user permissions granted by a `/P` value. Bits with no defined
/// meaning in the current revision are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions
{
    pub print: bool,
    pub modify_contents: bool,
    pub copy_content: bool,
    pub modify_annotations: bool,
    pub fill_forms: bool,
    pub extract_for_accessibility: bool,
    pub assemble_document: bool,
    pub print_high_quality: bool
}

impl Permissions
{
    /// Decode a raw `/P` value. Bits are 1-indexed per the spec: bit 3 is
    /// `1 << 2`, and so on.
    pub fn from_raw(p: i32) -> Self
    {
        let bit = |n: u32| p & (1 << (n - 1)) != 0;
        Permissions {
            print: bit(3),
            modify_contents: bit(4),
            copy_content: bit(5),
            modify_annotations: bit(6),
            fill_forms: bit(9),
            extract_for_accessibility: bit(10),
            assemble_document: bit(11),
            print_high_quality: bit(12)
        }
    }

    /// Re-encode as a raw `/P` value, with the reserved bits (including
    /// the always-1 low two bits required by the spec) set as ISO
    /// 32000-1 7.6.3.2 mandates.
    pub fn to_raw(self) -> i32
    {
        let mut p: i32 = -4; // all bits set, low two bits cleared per spec's reserved-bit requirement
        let mut set = |n: u32, v: bool| {
            if v
            {
                p |= 1 << (n - 1);
            }
            else
            {
                p &= !(1 << (n - 1));
            }
        };
        set(3, self.print);
        set(4, self.modify_contents);
        set(5, self.copy_content);
        set(6, self.modify_annotations);
        set(9, self.fill_forms);
        set(10, self.extract_for_accessibility);
        set(11, self.assemble_document);
        set(12, self.print_high_quality);
        p
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn all_permissions_granted()
    {
        let perms = Permissions::from_raw(-4);
        assert!(perms.print);
        assert!(perms.modify_contents);
        assert!(perms.copy_content);
        assert!(perms.modify_annotations);
        assert!(perms.fill_forms);
        assert!(perms.extract_for_accessibility);
        assert!(perms.assemble_document);
        assert!(perms.print_high_quality);
    }

    #[test]
    fn only_printing_allowed()
    {
        let p: i32 = 1 << 2; // bit 3 only
        let perms = Permissions::from_raw(p);
        assert!(perms.print);
        assert!(!perms.copy_content);
        assert!(!perms.modify_contents);
    }

    #[test]
    fn round_trips_through_raw()
    {
        let perms = Permissions {
            print: true,
            modify_contents: false,
            copy_content: true,
            modify_annotations: false,
            fill_forms: true,
            extract_for_accessibility: false,
            assemble_document: true,
            print_high_quality: false
        };
        assert_eq!(Permissions::from_raw(perms.to_raw()), perms);
    }
}
