//! Enumerated option sets for scanner properties.
//!
//! Each set lists the values accepted by one family of properties, e.g.
//! [`LengthControlMode`] for every `*_LENGTH_CONTROL` property.

option_set! {
    /// Decoder aggressiveness levels.
    ///
    /// Shared by the Code 128, Code 39, Interleaved 2 of 5, MSI and UPC/EAN
    /// aggressiveness properties.
    Aggressiveness {
        VeryLow = 0 => "VERY_LOW",
        Low = 1 => "LOW",
        Medium = 2 => "MEDIUM",
        High = 3 => "HIGH",
        VeryHigh = 4 => "VERY_HIGH",
    }
}

/// Values of `CODE128_AGGRESSIVENESS`.
pub type Code128Aggressiveness = Aggressiveness;
/// Values of `CODE39_AGGRESSIVENESS`.
pub type Code39Aggressiveness = Aggressiveness;
/// Values of `I25_AGGRESSIVENESS`.
pub type Interleaved25Aggressiveness = Aggressiveness;
/// Values of `MSI_AGGRESSIVENESS`.
pub type MsiAggressiveness = Aggressiveness;
/// Values of `UPC_EAN_AGGRESSIVENESS`.
pub type UpcEanAggressiveness = Aggressiveness;

option_set! {
    /// Aimer beam behaviour (`TARGET_MODE`).
    BeamMode {
        TargetTimeout = 0 => "TARGET_TIMEOUT",
        ReleaseScan = 1 => "RELEASE_SCAN",
    }
}

option_set! {
    /// Character set used to interpret 2D payloads (`*_CHARACTER_SET_MODE`).
    CharacterSetMode {
        Big5 = 0 => "BIG_5",
        EucCn = 1 => "EUC_CN",
        EucKr = 2 => "EUC_KR",
        Gb18030 = 3 => "GB18030",
        Gbk = 4 => "GBK",
        Ibm437 = 5 => "IBM_437",
        Iso8859_1 = 6 => "ISO_8859_1",
        Iso8859_2 = 7 => "ISO_8859_2",
        Iso8859_3 = 8 => "ISO_8859_3",
        Iso8859_4 = 9 => "ISO_8859_4",
        Iso8859_5 = 10 => "ISO_8859_5",
        Iso8859_6 = 11 => "ISO_8859_6",
        Iso8859_7 = 12 => "ISO_8859_7",
        Iso8859_8 = 13 => "ISO_8859_8",
        Iso8859_9 = 14 => "ISO_8859_9",
        Iso8859_11 = 15 => "ISO_8859_11",
        Iso8859_13 = 16 => "ISO_8859_13",
        Iso8859_14 = 17 => "ISO_8859_14",
        Iso8859_15 = 18 => "ISO_8859_15",
        ShiftJis = 19 => "SHIFT_JIS",
        UsAscii = 20 => "US_ASCII",
        Utf8 = 21 => "UTF_8",
        Utf16 = 22 => "UTF_16",
        Windows1250 = 23 => "WINDOWS_1250",
        Windows1251 = 24 => "WINDOWS_1251",
        Windows1252 = 25 => "WINDOWS_1252",
        Windows1254 = 26 => "WINDOWS_1254",
        Windows1256 = 27 => "WINDOWS_1256",
    }
}

option_set! {
    /// Values of `DATAMATRIX_AGGRESSIVENESS`.
    DatamatrixAggressiveness {
        Low = 0 => "LOW",
        High = 1 => "HIGH",
    }
}

option_set! {
    /// Values of `DATAMATRIX_MIRROR`.
    DatamatrixMirror {
        RegularOnly = 0 => "REGULAR_ONLY",
        MirrorOnly = 1 => "MIRROR_ONLY",
        Both = 2 => "BOTH",
    }
}

option_set! {
    /// Values of `DATAMATRIX_OPERATING_MODE`.
    DatamatrixOpMode {
        VeryFast = 0 => "VERY_FAST",
        Fast = 1 => "FAST",
        Robust = 2 => "ROBUST",
        VeryRobust = 3 => "VERY_ROBUST",
    }
}

option_set! {
    /// Values of `ECI_POLICY`.
    EciPolicy {
        Transmit = 0 => "TRASMIT",
        Remove = 1 => "REMOVE",
    }
}

option_set! {
    /// Values of `ILLUMINATION_TIME`.
    IlluminationTime {
        ShortPulse = 0 => "SHORT_PULSE",
        LongPulse = 1 => "LONG_PULSE",
    }
}

option_set! {
    /// Values of `ILLUMINATION_TYPE`.
    IlluminationType {
        Auto = 0 => "AUTO",
        Red = 1 => "RED",
        White = 2 => "WHITE",
    }
}

option_set! {
    /// Values of `IMAGE_CAPTURE_PROFILE`.
    ImageCaptureProfile {
        AutomaticByEnabledSymbologies = 0 => "AUTOMATIC_BY_ENABLED_SYMBOLOGIES",
        MotionTolerance = 1 => "MOTION_TOLERANCE",
        ReflectionsTolerance = 2 => "REFLECTIONS_TOLERANCE",
        Custom = 3 => "CUSTOM",
    }
}

option_set! {
    /// Values of `WEDGE_INTENT_DELIVERY_MODE`.
    IntentDeliveryMode {
        StartActivity = 0 => "START_ACTIVITY",
        StartService = 1 => "START_SERVICE",
        Broadcast = 2 => "BROADCAST",
    }
}

option_set! {
    /// Values of `INVERSE_1D_SYMBOLOGIES` and `INVERSE_2D_SYMBOLOGIES`.
    InverseMode {
        RegularOnly = 0 => "REGULAR_ONLY",
        ReverseOnly = 1 => "REVERSE_ONLY",
        Both = 2 => "BOTH",
    }
}

option_set! {
    /// Values of `ISBT_128_MODE`.
    Isbt128Mode {
        SingleOnly = 0 => "SINGLE_ONLY",
        ConcatenatedOnly = 1 => "CONCATENATED_ONLY",
        Both = 2 => "BOTH",
    }
}

option_set! {
    /// Values of `WEDGE_KEYBOARD_DELIVERY_MODE`.
    KeyWedgeMode {
        TextInjection = 0 => "TEXT_INJECTION",
        KeyPressure = 1 => "KEY_PRESSURE",
        CommitText = 2 => "COMMIT_TEXT",
    }
}

option_set! {
    /// Values of the `*_LENGTH_CONTROL` properties.
    LengthControlMode {
        None = 0 => "NONE",
        OneFixed = 1 => "ONE_FIXED",
        TwoFixed = 2 => "TWO_FIXED",
        Range = 3 => "RANGE",
    }
}

option_set! {
    /// Values of `MULTISCAN_PARTIAL_RESULT_MODE`.
    PartialResultMode {
        Never = 0 => "NEVER",
        Timeout = 1 => "TIMEOUT",
        Release = 2 => "RELEASE",
        Both = 3 => "BOTH",
    }
}

option_set! {
    /// Values of `SCAN_MODE`.
    ScanMode {
        Single = 0 => "SINGLE",
        HoldMultiple = 1 => "HOLD_MULTIPLE",
        PulseMultiple = 2 => "PULSE_MULTIPLE",
        AlwaysOn = 3 => "ALWAYS_ON",
    }
}

option_set! {
    /// Values of `SEND_CODE_ID`.
    SendCodeId {
        None = 0 => "NONE",
        DatalogicIdentifierBeforeLabel = 1 => "DATALOGIC_IDENTIFIER_BEFORE_LABEL",
        AimIdentifierBeforeLabel = 2 => "AIM_IDENTIFIER_BEFORE_LABEL",
        UserdefinedIdentifierBeforeLabel = 3 => "USERDEFINED_IDENTIFIER_BEFORE_LABEL",
        DatalogicIdentifierAfterLabel = 4 => "DATALOGIC_IDENTIFIER_AFTER_LABEL",
        UserdefinedIdentifierAfterLabel = 5 => "USERDEFINED_IDENTIFIER_AFTER_LABEL",
    }
}

option_set! {
    /// Values of `GOOD_READ_AUDIO_CHANNEL`.
    ToneNotificationChannel {
        Scanner = 0 => "SCANNER",
        Music = 1 => "MUSIC",
        VoiceCall = 2 => "VOICE_CALL",
        Alarm = 3 => "ALARM",
        Ring = 4 => "RING",
    }
}

option_set! {
    /// Values of `GOOD_READ_AUDIO_MODE`.
    ToneNotificationMode {
        None = 0 => "NONE",
        Beep = 1 => "BEEP",
        AudioFile = 2 => "AUDIO_FILE",
        Viper = 3 => "VIPER",
        Baroque = 4 => "BAROQUE",
    }
}

option_set! {
    /// Values of `COMPOSITE_EAN_UPC_MODE`.
    UpcEanCompositeMode {
        Auto = 0 => "AUTO",
        AlwaysLinked = 1 => "ALWAYS_LINKED",
        NeverLinked = 2 => "NEVER_LINKED",
    }
}
