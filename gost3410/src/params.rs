//! Named curve parameter sets.
//!
//! All values are big-endian. Pass a set to
//! [`Curve::from_params`](crate::Curve::from_params) to get a usable curve.
//!
//! - [RFC 5832 § 7]: test parameters of GOST R 34.10-2001
//! - [RFC 4357 § 11.4]: CryptoPro signature and key exchange parameters
//! - [RFC 7836 § A.1]: TC26 512-bit parameters of GOST R 34.10-2012
//!
//! [RFC 5832 § 7]: https://www.rfc-editor.org/rfc/rfc5832#section-7
//! [RFC 4357 § 11.4]: https://www.rfc-editor.org/rfc/rfc4357#section-11.4
//! [RFC 7836 § A.1]: https://www.rfc-editor.org/rfc/rfc7836#appendix-A.1

use hex_literal::hex;

/// Domain parameters of a short Weierstrass curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Human-readable name of the parameter set.
    pub name: &'static str,

    /// Field modulus.
    pub p: &'static [u8],

    /// Order of the base point subgroup.
    pub q: &'static [u8],

    /// Coefficient `a` of the curve equation.
    pub a: &'static [u8],

    /// Coefficient `b` of the curve equation.
    pub b: &'static [u8],

    /// Base point x-coordinate.
    pub bx: &'static [u8],

    /// Base point y-coordinate.
    pub by: &'static [u8],
}

/// Test parameters of GOST R 34.10-2001.
pub const GOST_R_34_10_2001_TEST: CurveParams = CurveParams {
    name: "id-GostR3410-2001-TestParamSet",
    p: &hex!("8000000000000000000000000000000000000000000000000000000000000431"),
    q: &hex!("8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3"),
    a: &hex!("07"),
    b: &hex!("5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E"),
    bx: &hex!("02"),
    by: &hex!("08E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8"),
};

/// CryptoPro parameter set A.
pub const GOST_R_34_10_2001_CRYPTO_PRO_A: CurveParams = CurveParams {
    name: "id-GostR3410-2001-CryptoPro-A-ParamSet",
    p: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97"),
    q: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893"),
    a: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94"),
    b: &hex!("A6"),
    bx: &hex!("01"),
    by: &hex!("8D91E471E0989CDA27DF505A453F2B7635294F2DDF23E3B122ACC99C9E9F1E14"),
};

/// CryptoPro parameter set B.
pub const GOST_R_34_10_2001_CRYPTO_PRO_B: CurveParams = CurveParams {
    name: "id-GostR3410-2001-CryptoPro-B-ParamSet",
    p: &hex!("8000000000000000000000000000000000000000000000000000000000000C99"),
    q: &hex!("800000000000000000000000000000015F700CFFF1A624E5E497161BCC8A198F"),
    a: &hex!("8000000000000000000000000000000000000000000000000000000000000C96"),
    b: &hex!("3E1AF419A269A5F866A7D3C25C3DF80AE979259373FF2B182F49D4CE7E1BBC8B"),
    bx: &hex!("01"),
    by: &hex!("3FA8124359F96680B83D1C3EB2C070E5C545C9858D03ECFB744BF8D717717EFC"),
};

/// CryptoPro parameter set C.
pub const GOST_R_34_10_2001_CRYPTO_PRO_C: CurveParams = CurveParams {
    name: "id-GostR3410-2001-CryptoPro-C-ParamSet",
    p: &hex!("9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D759B"),
    q: &hex!("9B9F605F5A858107AB1EC85E6B41C8AA582CA3511EDDFB74F02F3A6598980BB9"),
    a: &hex!("9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D7598"),
    b: &hex!("805A"),
    bx: &hex!("00"),
    by: &hex!("41ECE55743711A8C3CBF3783CD08C0EE4D4DC440D4641A8F366E550DFDB3BB67"),
};

/// CryptoPro key exchange parameter set A (same domain parameters as
/// [`GOST_R_34_10_2001_CRYPTO_PRO_A`]).
pub const GOST_R_34_10_2001_CRYPTO_PRO_XCH_A: CurveParams = CurveParams {
    name: "id-GostR3410-2001-CryptoPro-XchA-ParamSet",
    ..GOST_R_34_10_2001_CRYPTO_PRO_A
};

/// CryptoPro key exchange parameter set B (same domain parameters as
/// [`GOST_R_34_10_2001_CRYPTO_PRO_C`]).
pub const GOST_R_34_10_2001_CRYPTO_PRO_XCH_B: CurveParams = CurveParams {
    name: "id-GostR3410-2001-CryptoPro-XchB-ParamSet",
    ..GOST_R_34_10_2001_CRYPTO_PRO_C
};

/// TC26 512-bit parameter set A.
pub const GOST_R_34_10_2012_TC26_512_A: CurveParams = CurveParams {
    name: "id-tc26-gost-3410-12-512-paramSetA",
    p: &hex!(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7"
    ),
    q: &hex!(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
        "27E69532F48D89116FF22B8D4E0560609B4B38ABFAD2B85DCACDB1411F10B275"
    ),
    a: &hex!(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC4"
    ),
    b: &hex!(
        "E8C2505DEDFC86DDC1BD0B2B6667F1DA34B82574761CB0E879BD081CFD0B6265"
        "EE3CB090F30D27614CB4574010DA90DD862EF9D4EBEE4761503190785A71C760"
    ),
    bx: &hex!("03"),
    by: &hex!(
        "7503CFE87A836AE3A61B8816E25450E6CE5E1C93ACF1ABC1778064FDCBEFA921"
        "DF1626BE4FD036E93D75E6A50E3A41E98028FE5FC235F5B889A589CB5215F2A4"
    ),
};

/// TC26 512-bit parameter set B.
pub const GOST_R_34_10_2012_TC26_512_B: CurveParams = CurveParams {
    name: "id-tc26-gost-3410-12-512-paramSetB",
    p: &hex!(
        "8000000000000000000000000000000000000000000000000000000000000000"
        "000000000000000000000000000000000000000000000000000000000000006F"
    ),
    q: &hex!(
        "8000000000000000000000000000000000000000000000000000000000000001"
        "49A1EC142565A545ACFDB77BD9D40CFA8B996712101BEA0EC6346C54374F25BD"
    ),
    a: &hex!(
        "8000000000000000000000000000000000000000000000000000000000000000"
        "000000000000000000000000000000000000000000000000000000000000006C"
    ),
    b: &hex!(
        "687D1B459DC841457E3E06CF6F5E2517B97C7D614AF138BCBF85DC806C4B289F"
        "3E965D2DB1416D217F8B276FAD1AB69C50F78BEE1FA3106EFB8CCBC7C5140116"
    ),
    bx: &hex!("02"),
    by: &hex!(
        "1A8F7EDA389B094C2C071E3647A8940F3C123B697578C213BE6DD9E6C8EC7335"
        "DCB228FD1EDF4A39152CBCAAF8C0398828041055F94CEEEC7E21340780FE41BD"
    ),
};

/// Every parameter set defined in this module.
pub const ALL: &[CurveParams] = &[
    GOST_R_34_10_2001_TEST,
    GOST_R_34_10_2001_CRYPTO_PRO_A,
    GOST_R_34_10_2001_CRYPTO_PRO_B,
    GOST_R_34_10_2001_CRYPTO_PRO_C,
    GOST_R_34_10_2001_CRYPTO_PRO_XCH_A,
    GOST_R_34_10_2001_CRYPTO_PRO_XCH_B,
    GOST_R_34_10_2012_TC26_512_A,
    GOST_R_34_10_2012_TC26_512_B,
];
