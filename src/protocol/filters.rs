use serde::Serialize;

/// Suppresses a band of the stereo image, typically the vocal center.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Karaoke {
    pub level: f64,
    pub mono_level: f64,
    /// Center frequency of the band to suppress, in Hz.
    pub filter_band: f64,
    pub filter_width: f64,
}

/// Changes playback speed, pitch, and rate independently.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timescale {
    pub speed: f64,
    pub pitch: f64,
    pub rate: f64,
}

/// Oscillates the volume.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tremolo {
    pub frequency: f64,
    pub depth: f64,
}

/// Oscillates the pitch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vibrato {
    pub frequency: f64,
    pub depth: f64,
}

/// Rotates the audio around the stereo field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub rotation_hz: f64,
}

/// Waveshaping distortion over trigonometric transforms of the signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distortion {
    pub sin_offset: f64,
    pub sin_scale: f64,
    pub cos_offset: f64,
    pub cos_scale: f64,
    pub tan_offset: f64,
    pub tan_scale: f64,
    pub offset: f64,
    pub scale: f64,
}

/// Mixes the left and right channels into each other.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMix {
    pub left_to_left: f64,
    pub left_to_right: f64,
    pub right_to_left: f64,
    pub right_to_right: f64,
}

/// Higher frequencies get suppressed while lower ones pass through.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowPass {
    pub smoothing: f64,
}

macro_rules! define_filter_set {
    ($($field:ident : $type:ty => $name:expr),* $(,)?) => {
        /// The full set of node-side audio filters carried by one `filters` op.
        ///
        /// An absent slot is omitted from the wire entirely, which the node
        /// reads as "leave that filter unchanged"; a slot sent with a kind's
        /// neutral values instead resets that filter. Present values are
        /// copied verbatim, no range checks; the node validates.
        #[derive(Debug, Clone, Default, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Filters {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$type>,
            )*
        }

        impl Filters {
            /// Wire names of all filter kinds, in envelope order.
            pub fn names() -> Vec<&'static str> {
                vec![$($name),*]
            }

            /// True when every slot is absent.
            pub fn is_empty(&self) -> bool {
                $(self.$field.is_none() &&)* true
            }
        }
    };
}

define_filter_set! {
    karaoke: Karaoke => "karaoke",
    timescale: Timescale => "timescale",
    tremolo: Tremolo => "tremolo",
    vibrato: Vibrato => "vibrato",
    rotation: Rotation => "rotation",
    distortion: Distortion => "distortion",
    channel_mix: ChannelMix => "channelMix",
    low_pass: LowPass => "lowPass",
}

/// A single equalizer band adjustment.
///
/// The node exposes 15 bands (0-14). Out-of-range or duplicate indices are
/// passed through untouched; range handling is the node's concern.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EqualizerBand {
    pub band: u8,
    pub gain: f32,
}

impl EqualizerBand {
    pub fn new(band: u8, gain: f32) -> Self {
        Self { band, gain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_serializes_to_no_keys() {
        let filters = Filters::default();
        assert!(filters.is_empty());
        assert_eq!(serde_json::to_string(&filters).unwrap(), "{}");
    }

    #[test]
    fn test_single_kind_emits_exactly_one_key() {
        let filters = Filters {
            timescale: Some(Timescale {
                speed: 1.2,
                pitch: 1.0,
                rate: 1.0,
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&filters).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(
            json["timescale"],
            serde_json::json!({"speed": 1.2, "pitch": 1.0, "rate": 1.0})
        );
    }

    #[test]
    fn test_absent_kinds_are_omitted_not_null() {
        let filters = Filters {
            low_pass: Some(LowPass { smoothing: 20.0 }),
            ..Default::default()
        };

        let json = serde_json::to_value(&filters).unwrap();
        let obj = json.as_object().unwrap();
        for name in Filters::names() {
            if name == "lowPass" {
                assert!(obj.contains_key(name));
            } else {
                assert!(!obj.contains_key(name), "unexpected key {name}");
            }
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        assert_eq!(
            Filters::names(),
            vec![
                "karaoke",
                "timescale",
                "tremolo",
                "vibrato",
                "rotation",
                "distortion",
                "channelMix",
                "lowPass",
            ]
        );
    }

    #[test]
    fn test_distortion_field_names_match_node() {
        let distortion = Distortion {
            sin_offset: 0.0,
            sin_scale: 1.0,
            cos_offset: 0.0,
            cos_scale: 1.0,
            tan_offset: 0.0,
            tan_scale: 1.0,
            offset: 0.0,
            scale: 1.0,
        };

        let json = serde_json::to_value(&distortion).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "sinOffset",
            "sinScale",
            "cosOffset",
            "cosScale",
            "tanOffset",
            "tanScale",
            "offset",
            "scale",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 8);
    }

    #[test]
    fn test_channel_mix_and_karaoke_field_names() {
        let mix = ChannelMix {
            left_to_left: 1.0,
            left_to_right: 0.0,
            right_to_left: 0.0,
            right_to_right: 1.0,
        };
        let json = serde_json::to_value(&mix).unwrap();
        assert!(json.get("leftToLeft").is_some());
        assert!(json.get("rightToRight").is_some());

        let karaoke = Karaoke {
            level: 1.0,
            mono_level: 1.0,
            filter_band: 220.0,
            filter_width: 100.0,
        };
        let json = serde_json::to_value(&karaoke).unwrap();
        assert!(json.get("monoLevel").is_some());
        assert!(json.get("filterBand").is_some());
        assert!(json.get("filterWidth").is_some());
    }
}
