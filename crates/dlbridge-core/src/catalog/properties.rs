//! Scanner property identifiers.
//!
//! Each constant names one configurable characteristic of the scan engine;
//! pass it to `get_property`/`set_property` of the barcode manager.

use crate::PropertyId;

id_catalog!(PropertyId {
    AIM_ENABLE                           = 8,
    AUSTRALIAN_CODE_USER_ID              = 2351,
    AUSTRALIAN_POST_ENABLE               = 2327,
    AZTEC_CHARACTER_SET_MODE             = 2842,
    AZTEC_ENABLE                         = 2840,
    AZTEC_LENGTH1                        = 2860,
    AZTEC_LENGTH2                        = 2861,
    AZTEC_LENGTH_CONTROL                 = 2862,
    AZTEC_USER_ID                        = 2863,
    CODABAR_CLSI                         = 774,
    CODABAR_ENABLE                       = 768,
    CODABAR_ENABLE_CHECK                 = 770,
    CODABAR_LENGTH1                      = 800,
    CODABAR_LENGTH2                      = 801,
    CODABAR_LENGTH_CONTROL               = 802,
    CODABAR_SEND_CHECK                   = 771,
    CODABAR_SEND_START                   = 773,
    CODABAR_SHORT_QUIET_ZONES            = 804,
    CODABAR_USER_ID                      = 803,
    CODE128_AGGRESSIVENESS               = 1065,
    CODE128_ENABLE                       = 1032,
    CODE128_GS1_ENABLE                   = 1036,
    CODE128_GS1_USER_ID                  = 1064,
    CODE128_LENGTH1                      = 1060,
    CODE128_LENGTH2                      = 1061,
    CODE128_LENGTH_CONTROL               = 1062,
    CODE128_SHORT_QUIET_ZONES            = 1066,
    CODE128_USER_ID                      = 1063,
    CODE32_ENABLE                        = 272,
    CODE32_USER_ID                       = 295,
    CODE39_AGGRESSIVENESS                = 292,
    CODE39_ENABLE                        = 256,
    CODE39_ENABLE_CHECK                  = 258,
    CODE39_FULL_ASCII                    = 261,
    CODE39_LENGTH1                       = 288,
    CODE39_LENGTH2                       = 289,
    CODE39_LENGTH_CONTROL                = 290,
    CODE39_SEND_CHECK                    = 259,
    CODE39_SHORT_QUIET_ZONES             = 257,
    CODE39_USER_ID                       = 291,
    CODE93_ENABLE                        = 1024,
    CODE93_LENGTH1                       = 1056,
    CODE93_LENGTH2                       = 1057,
    CODE93_LENGTH_CONTROL                = 1058,
    CODE93_SHORT_QUIET_ZONES             = 1067,
    CODE93_USER_ID                       = 1059,
    COMPOSITE_EAN_UPC_MODE               = 2610,
    COMPOSITE_ENABLE                     = 2608,
    COMPOSITE_GS1_128_MODE               = 2611,
    COMPOSITE_LINEAR_TRANSMISSION_ENABLE = 2612,
    COMPOSITE_USER_ID                    = 2643,
    D25_ENABLE                           = 512,
    D25_LENGTH1                          = 544,
    D25_LENGTH2                          = 545,
    D25_LENGTH_CONTROL                   = 546,
    D25_USER_ID                          = 547,
    DATAMATRIX_AGGRESSIVENESS            = 2822,
    DATAMATRIX_CHARACTER_SET_MODE        = 2818,
    DATAMATRIX_ENABLE                    = 2816,
    DATAMATRIX_GS1_ENABLE                = 2821,
    DATAMATRIX_LENGTH1                   = 2848,
    DATAMATRIX_LENGTH2                   = 2849,
    DATAMATRIX_LENGTH_CONTROL            = 2850,
    DATAMATRIX_MIRROR                    = 2820,
    DATAMATRIX_OPERATING_MODE            = 2819,
    DATAMATRIX_USER_ID                   = 2851,
    DECODE_TIMEOUT                       = 45,
    DIGIMARC_ENABLE                      = 65536,
    DISPLAY_MODE_ENABLE                  = 6,
    DISPLAY_NOTIFICATION_ENABLE          = 49,
    DOTCODE_CHARACTER_SET_MODE           = 3074,
    DOTCODE_ENABLE                       = 3072,
    DOTCODE_LENGTH1                      = 3104,
    DOTCODE_LENGTH2                      = 3105,
    DOTCODE_LENGTH_CONTROL               = 3106,
    DOTCODE_USER_ID                      = 3107,
    DOUBLE_READ_TIMEOUT                  = 102,
    EAN13_COMPOSITE_ENABLE               = 1302,
    EAN13_ENABLE                         = 1296,
    EAN13_SEND_CHECK                     = 1298,
    EAN13_SEND_SYS                       = 1299,
    EAN13_TO_ISBN                        = 1300,
    EAN13_TO_ISSN                        = 1301,
    EAN13_USER_ID                        = 1317,
    EAN8_COMPOSITE_ENABLE                = 1320,
    EAN8_ENABLE                          = 1304,
    EAN8_SEND_CHECK                      = 1306,
    EAN8_TO_EAN13                        = 1307,
    EAN8_USER_ID                         = 1319,
    EAN_EXT_ENABLE_2_DIGIT               = 1308,
    EAN_EXT_ENABLE_5_DIGIT               = 1309,
    EAN_EXT_REQUIRE                      = 1311,
    ECI_POLICY                           = 262656,
    EXTERNAL_FORMATTING_ENABLE           = 262144,
    GOOD_READ_AUDIO_CHANNEL              = 52,
    GOOD_READ_AUDIO_FILE                 = 48,
    GOOD_READ_AUDIO_MODE                 = 51,
    GOOD_READ_AUDIO_VOLUME               = 47,
    GOOD_READ_COUNT                      = 32,
    GOOD_READ_DURATION                   = 34,
    GOOD_READ_ENABLE                     = 16,
    GOOD_READ_INTERVAL                   = 46,
    GOOD_READ_LED_ENABLE                 = 19,
    GOOD_READ_VIBRATE_ENABLE             = 18,
    GREEN_SPOT_ENABLE                    = 17,
    GS1_14_ENABLE                        = 2048,
    GS1_14_GS1_128_MODE                  = 2051,
    GS1_14_USER_ID                       = 2081,
    GS1_EXP_ENABLE                       = 2064,
    GS1_EXP_GS1_128_MODE                 = 2067,
    GS1_EXP_LENGTH1                      = 2084,
    GS1_EXP_LENGTH2                      = 2085,
    GS1_EXP_LENGTH_CONTROL               = 2086,
    GS1_EXP_USER_ID                      = 2087,
    GS1_LIMIT_ENABLE                     = 2056,
    GS1_LIMIT_GS1_128_MODE               = 2059,
    GS1_LIMIT_USER_ID                    = 2083,
    GS_SUBSTITUTION                      = 44,
    I25_AGGRESSIVENESS                   = 557,
    I25_ENABLE                           = 528,
    I25_ENABLE_CHECK                     = 530,
    I25_LENGTH1                          = 552,
    I25_LENGTH2                          = 553,
    I25_LENGTH_CONTROL                   = 554,
    I25_SEND_CHECK                       = 531,
    I25_SHORT_QUIET_ZONES                = 558,
    I25_USER_ID                          = 555,
    ILLUMINATION_ENABLE                  = 7,
    ILLUMINATION_TIME                    = 103,
    ILLUMINATION_TYPE                    = 14,
    IMAGE_CAPTURE_PROFILE                = 12,
    INVERSE_1D_SYMBOLOGIES               = 96,
    INVERSE_2D_SYMBOLOGIES               = 97,
    ISBT_128_COMMONLY_CONCATENATED_PAIRS = 3330,
    ISBT_128_ENABLE                      = 3328,
    ISBT_128_MODE                        = 3331,
    ISBT_128_USER_ID                     = 3329,
    ITF14_ENABLE                         = 556,
    JAPANESE_POST_CODE_USER_ID           = 2353,
    JAPANESE_POST_ENABLE                 = 2329,
    KIX_CODE_ENABLE                      = 2328,
    KIX_CODE_USER_ID                     = 2352,
    LABEL_PREFIX                         = 38,
    LABEL_SUFFIX                         = 39,
    M25_ENABLE                           = 520,
    M25_LENGTH1                          = 548,
    M25_LENGTH2                          = 549,
    M25_LENGTH_CONTROL                   = 550,
    M25_SHORT_QUIET_ZONES                = 559,
    M25_USER_ID                          = 551,
    MAXICODE_ENABLE                      = 2824,
    MAXICODE_LENGTH1                     = 2852,
    MAXICODE_LENGTH2                     = 2853,
    MAXICODE_LENGTH_CONTROL              = 2854,
    MAXICODE_USER_ID                     = 2855,
    MICROPDF417_CHARACTER_SET_MODE       = 2570,
    MICROPDF417_ENABLE                   = 2568,
    MICROPDF417_LENGTH1                  = 2596,
    MICROPDF417_LENGTH2                  = 2597,
    MICROPDF417_LENGTH_CONTROL           = 2598,
    MICROPDF417_USER_ID                  = 2599,
    MICRO_QR_CHARACTER_SET_MODE          = 2838,
    MICRO_QR_ENABLE                      = 2836,
    MICRO_QR_LENGTH1                     = 2864,
    MICRO_QR_LENGTH2                     = 2865,
    MICRO_QR_LENGTH_CONTROL              = 2866,
    MICRO_QR_USER_ID                     = 2867,
    MSI_AGGRESSIVENESS                   = 1576,
    MSI_CHECK_2_MOD_11                   = 1548,
    MSI_ENABLE                           = 1544,
    MSI_LENGTH1                          = 1572,
    MSI_LENGTH2                          = 1573,
    MSI_LENGTH_CONTROL                   = 1574,
    MSI_REQUIRE_2_CHECK                  = 1546,
    MSI_SEND_CHECK                       = 1547,
    MSI_SHORT_QUIET_ZONES                = 1577,
    MSI_USER_ID                          = 1575,
    MULTISCAN_ENABLE                     = 80,
    MULTISCAN_NOTIFICATION_ENABLE        = 82,
    MULTISCAN_PARTIAL_RESULT_MODE        = 83,
    MULTISCAN_REQUIRED_LABELS            = 81,
    OCR_CONFIDENCE                       = 262916,
    OCR_ENABLE                           = 262912,
    OCR_ID_ENABLE                        = 262915,
    OCR_MULTIFRAME                       = 262917,
    OCR_PASSPORT_ENABLE                  = 262914,
    OCR_USER_ID                          = 262913,
    PDF417_CHARACTER_SET_MODE            = 2562,
    PDF417_ENABLE                        = 2560,
    PDF417_LENGTH1                       = 2592,
    PDF417_LENGTH2                       = 2593,
    PDF417_LENGTH_CONTROL                = 2594,
    PDF417_USER_ID                       = 2595,
    PICKLIST_ENABLE                      = 10,
    PRESENTATION_MODE_AIMER_ENABLE       = 99,
    PRESENTATION_MODE_ENABLE             = 98,
    PRESENTATION_MODE_SENSITIVITY        = 100,
    QRCODE_CHARACTER_SET_MODE            = 2834,
    QRCODE_ENABLE                        = 2832,
    QRCODE_GS1_ENABLE                    = 2835,
    QRCODE_LENGTH1                       = 2856,
    QRCODE_LENGTH2                       = 2857,
    QRCODE_LENGTH_CONTROL                = 2858,
    QRCODE_S2D_ENABLE                    = 200258,
    QRCODE_USER_ID                       = 2859,
    QRCODE_WIFI_ENABLE                   = 200257,
    REMOVE_NON_PRINTABLE_CHARS           = 24,
    ROYAL_MAIL_CODE_USER_ID              = 2350,
    ROYAL_MAIL_ENABLE                    = 2325,
    ROYAL_MAIL_SEND_CHECK                = 2326,
    SCAN_MODE                            = 101,
    SEND_CODE_ID                         = 37,
    TARGET_MODE                          = 9,
    TARGET_MODE_ENABLE                   = 11,
    TARGET_RELEASE_TIMEOUT               = 42,
    TARGET_TIMEOUT                       = 41,
    TRIOPTIC_ENABLE                      = 264,
    TRIOPTIC_USER_ID                     = 293,
    UPCA_COMPOSITE_ENABLE                = 1285,
    UPCA_ENABLE                          = 1280,
    UPCA_SEND_CHECK                      = 1282,
    UPCA_SEND_SYS                        = 1283,
    UPCA_TO_EAN13                        = 1284,
    UPCA_USER_ID                         = 1313,
    UPCE1_ENABLE                         = 1289,
    UPCE_COMPOSITE_ENABLE                = 1293,
    UPCE_ENABLE                          = 1288,
    UPCE_SEND_CHECK                      = 1290,
    UPCE_SEND_SYS                        = 1291,
    UPCE_TO_UPCA                         = 1292,
    UPCE_USER_ID                         = 1315,
    UPC_EAN_AGGRESSIVENESS               = 1318,
    UPC_EAN_SHORT_QUIET_ZONES            = 1312,
    USPS_4STATE_CODE_USER_ID             = 2348,
    USPS_4STATE_ENABLE                   = 2323,
    US_PLANET_CODE_USER_ID               = 2346,
    US_PLANET_ENABLE                     = 2321,
    US_POSTNET_CODE_USER_ID              = 2347,
    US_POSTNET_ENABLE                    = 2320,
    WEDGE_INTENT_ACTION_NAME             = 200001,
    WEDGE_INTENT_CATEGORY_NAME           = 200002,
    WEDGE_INTENT_DELIVERY_MODE           = 200003,
    WEDGE_INTENT_ENABLE                  = 200000,
    WEDGE_INTENT_EXTRA_BARCODE_DATA      = 200004,
    WEDGE_INTENT_EXTRA_BARCODE_STRING    = 200006,
    WEDGE_INTENT_EXTRA_BARCODE_TYPE      = 200005,
    WEDGE_KEYBOARD_DELIVERY_MODE         = 70002,
    WEDGE_KEYBOARD_ENABLE                = 70000,
    WEDGE_KEYBOARD_ONLY_ON_FOCUS         = 70001,
    WEDGE_WEB_ENABLE                     = 200256,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(PropertyId::CODE39_ENABLE.as_u32(), 256);
        assert_eq!(PropertyId::WEDGE_KEYBOARD_ENABLE.as_u32(), 70000);
        assert_eq!(PropertyId::from_name("LABEL_PREFIX"), Some(PropertyId::LABEL_PREFIX));
        assert_eq!(PropertyId::from_name("NOT_A_PROPERTY"), None);
        assert_eq!(PropertyId::new(45).name(), Some("DECODE_TIMEOUT"));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<u32> = PropertyId::ALL.iter().map(|(_, id)| id.as_u32()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 250);
    }
}
