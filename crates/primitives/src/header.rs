use alloy_primitives::{B256, Bytes, hex, keccak256};
use derive_more::derive::{Deref, From, Into};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Errors that can occur while canonicalizing a raw block header.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// A field that every header must carry is absent from the record.
    #[error("malformed header: required field `{0}` is missing")]
    MissingField(&'static str),
    /// A field is present but is not a hex string.
    #[error("malformed header: field `{field}` is not valid hex: {value}")]
    InvalidHex {
        /// The name of the field, as returned by the node.
        field: &'static str,
        /// The offending value.
        value: String,
    },
    /// The canonical encoding does not hash to the block hash reported by the node.
    #[error("canonical header hashes to {computed}, node reported {reported}")]
    HashMismatch {
        /// `keccak256` of the canonical encoding.
        computed: B256,
        /// The `hash` field of the raw record.
        reported: B256,
    },
}

/// A block header exactly as returned by a node's `eth_getBlockBy*` methods: a mapping of
/// field names to JSON values.
///
/// Only string values are considered header fields. A field set to `null` is treated as absent,
/// and non-string values (transaction lists, uncles, withdrawals) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Deref, From, Into)]
#[serde(transparent)]
pub struct RawHeader(Map<String, Value>);

impl RawHeader {
    /// Returns the hex string value of the given field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Returns the block hash reported by the node, if present and well-formed.
    pub fn hash(&self) -> Option<B256> {
        self.field("hash").and_then(|hash| hash.parse().ok())
    }
}

/// How a header field is turned into an RLP byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// Hashes, addresses, bloom, extra data, mix hash and nonce: raw bytes, never trimmed.
    Fixed,
    /// Scalars: big-endian with all leading zero bytes removed. Zero is the empty string.
    Integer,
}

impl FieldKind {
    fn encode(self, field: &'static str, value: &str) -> Result<Bytes, HeaderError> {
        let bytes = decode_padded_hex(value)
            .ok_or_else(|| HeaderError::InvalidHex { field, value: value.to_owned() })?;

        match self {
            Self::Fixed => Ok(bytes.into()),
            Self::Integer => Ok(Bytes::copy_from_slice(trim_leading_zeros(&bytes))),
        }
    }
}

/// Fields present in every header since genesis, in consensus order.
const REQUIRED_FIELDS: [(&str, FieldKind); 15] = [
    ("parentHash", FieldKind::Fixed),
    ("sha3Uncles", FieldKind::Fixed),
    ("miner", FieldKind::Fixed),
    ("stateRoot", FieldKind::Fixed),
    ("transactionsRoot", FieldKind::Fixed),
    ("receiptsRoot", FieldKind::Fixed),
    ("logsBloom", FieldKind::Fixed),
    ("difficulty", FieldKind::Integer),
    ("number", FieldKind::Integer),
    ("gasLimit", FieldKind::Integer),
    ("gasUsed", FieldKind::Integer),
    ("timestamp", FieldKind::Integer),
    ("extraData", FieldKind::Fixed),
    ("mixHash", FieldKind::Fixed),
    ("nonce", FieldKind::Fixed),
];

/// Fork-dependent suffix, in the order each fork appended it:
/// London, Shanghai, Cancun (x3), Prague.
const OPTIONAL_FIELDS: [(&str, FieldKind); 6] = [
    ("baseFeePerGas", FieldKind::Integer),
    ("withdrawalsRoot", FieldKind::Fixed),
    ("blobGasUsed", FieldKind::Integer),
    ("excessBlobGas", FieldKind::Integer),
    ("parentBeaconBlockRoot", FieldKind::Fixed),
    ("requestsHash", FieldKind::Fixed),
];

/// Re-encodes a raw header record into the RLP byte sequence whose `keccak256` is the block
/// hash.
///
/// Optional fields are appended only when the record carries them, so the output mirrors the
/// header shape of whichever fork produced the block. A present field with a zero value is still
/// appended.
pub fn canonical_header(raw: &RawHeader) -> Result<Bytes, HeaderError> {
    let mut fields = Vec::with_capacity(REQUIRED_FIELDS.len() + OPTIONAL_FIELDS.len());

    for (name, kind) in REQUIRED_FIELDS {
        let value = raw.field(name).ok_or(HeaderError::MissingField(name))?;
        fields.push(kind.encode(name, value)?);
    }

    for (name, kind) in OPTIONAL_FIELDS {
        if let Some(value) = raw.field(name) {
            fields.push(kind.encode(name, value)?);
        }
    }

    Ok(alloy_rlp::encode(&fields).into())
}

/// Same as [`canonical_header`], but also checks the result against the `hash` reported in the
/// record (when there is one).
///
/// A mismatch means the node returned a header shape this encoder does not know about, and any
/// proof built on top of it would be rejected by the verifier.
pub fn canonical_header_checked(raw: &RawHeader) -> Result<Bytes, HeaderError> {
    let encoded = canonical_header(raw)?;

    if let Some(reported) = raw.hash() {
        let computed = keccak256(&encoded);
        if computed != reported {
            return Err(HeaderError::HashMismatch { computed, reported });
        }
    }

    Ok(encoded)
}

/// Decodes a `0x`-prefixed hex string, left-padding odd-length inputs with a single `0` nibble.
fn decode_padded_hex(value: &str) -> Option<Vec<u8>> {
    let digits = value.strip_prefix("0x").unwrap_or(value);

    if digits.len() % 2 == 0 {
        hex::decode(digits).ok()
    } else {
        hex::decode(format!("0{digits}")).ok()
    }
}

/// Strips whole leading zero bytes. An all-zero input becomes empty.
fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

#[cfg(test)]
mod tests {
    use alloy::consensus::Header;
    use alloy_primitives::{Address, B64, Bloom, U256, b256, bytes};
    use alloy_rlp::Decodable;
    use serde_json::json;

    use super::*;

    /// Ethereum mainnet block 0.
    fn mainnet_genesis() -> RawHeader {
        let value = json!({
            "hash": "0xd4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3",
            "parentHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
            "miner": "0x0000000000000000000000000000000000000000",
            "stateRoot": "0xd7f8974fb5ac78d9ac099b9ad5018bedc2ce0a72dad1827a1709da30580f0544",
            "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "difficulty": "0x400000000",
            "number": "0x0",
            "gasLimit": "0x1388",
            "gasUsed": "0x0",
            "timestamp": "0x0",
            "extraData": "0x11bbe8db4e347b4e8c937c1c8370e4b5ed33adb3db69cbdb7a38e1e50b1b82fa",
            "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "nonce": "0x0000000000000042",
            "size": "0x21c",
            "totalDifficulty": "0x400000000",
            "transactions": [],
            "uncles": []
        });

        serde_json::from_value(value).unwrap()
    }

    /// A header carrying every fork field up to Prague.
    fn prague_header() -> Header {
        Header {
            parent_hash: B256::repeat_byte(0x0a),
            beneficiary: Address::repeat_byte(0x95),
            state_root: B256::repeat_byte(0x11),
            transactions_root: B256::repeat_byte(0x22),
            receipts_root: B256::repeat_byte(0x33),
            logs_bloom: Bloom::repeat_byte(0x01),
            difficulty: U256::ZERO,
            number: 22_546_304,
            gas_limit: 36_000_000,
            gas_used: 12_345_678,
            timestamp: 1_747_000_000,
            extra_data: bytes!("6265617665726275696c642e6f7267"),
            mix_hash: B256::repeat_byte(0x44),
            nonce: B64::ZERO,
            base_fee_per_gas: Some(1_234_567),
            withdrawals_root: Some(B256::repeat_byte(0x55)),
            blob_gas_used: Some(0),
            excess_blob_gas: Some(393_216),
            parent_beacon_block_root: Some(B256::repeat_byte(0x66)),
            requests_hash: Some(B256::repeat_byte(0x77)),
            ..Default::default()
        }
    }

    fn raw_from_consensus(header: &Header) -> RawHeader {
        serde_json::from_value(serde_json::to_value(header).unwrap()).unwrap()
    }

    fn decode_fields(encoded: &[u8]) -> Vec<Bytes> {
        Vec::<Bytes>::decode(&mut &encoded[..]).unwrap()
    }

    #[test]
    fn mainnet_genesis_hashes_to_block_hash() {
        let raw = mainnet_genesis();
        let encoded = canonical_header(&raw).unwrap();

        assert_eq!(
            keccak256(&encoded),
            b256!("d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3")
        );
        assert_eq!(canonical_header_checked(&raw).unwrap(), encoded);
    }

    #[test]
    fn canonicalization_is_deterministic() {
        let raw = raw_from_consensus(&prague_header());
        assert_eq!(canonical_header(&raw).unwrap(), canonical_header(&raw).unwrap());
    }

    #[test]
    fn matches_consensus_encoding_for_every_fork_shape() {
        let full = prague_header();

        let cancun = Header { requests_hash: None, ..full.clone() };
        let shanghai = Header {
            blob_gas_used: None,
            excess_blob_gas: None,
            parent_beacon_block_root: None,
            ..cancun.clone()
        };
        let london = Header { withdrawals_root: None, ..shanghai.clone() };
        let frontier = Header { base_fee_per_gas: None, ..london.clone() };

        for header in [full, cancun, shanghai, london, frontier] {
            let encoded = canonical_header(&raw_from_consensus(&header)).unwrap();
            assert_eq!(encoded.as_ref(), alloy_rlp::encode(&header).as_slice());
            assert_eq!(keccak256(&encoded), header.hash_slow());
        }
    }

    #[test]
    fn integers_are_trimmed_to_minimal_big_endian() {
        let cases: [(&str, &[u8]); 6] = [
            ("0x0", &[]),
            ("0x", &[]),
            ("0x1", &[0x01]),
            ("0x100", &[0x01, 0x00]),
            ("0x00ff", &[0xff]),
            ("0x400000000", &[0x04, 0x00, 0x00, 0x00, 0x00]),
        ];

        for (input, expected) in cases {
            let encoded = FieldKind::Integer.encode("number", input).unwrap();
            assert_eq!(encoded.as_ref(), expected, "input: {input}");
        }
    }

    #[test]
    fn integers_wider_than_u64_are_kept_whole() {
        let wide = format!("0x1{}", "00".repeat(16));
        let encoded = FieldKind::Integer.encode("difficulty", &wide).unwrap();

        assert_eq!(encoded.len(), 17);
        assert_eq!(encoded[0], 0x01);
    }

    #[test]
    fn fixed_fields_are_never_trimmed() {
        let encoded = FieldKind::Fixed.encode("nonce", "0x0000000000000042").unwrap();
        assert_eq!(encoded.as_ref(), &[0, 0, 0, 0, 0, 0, 0, 0x42]);

        let encoded = FieldKind::Fixed.encode("extraData", "0x").unwrap();
        assert!(encoded.is_empty());
    }

    #[test]
    fn pre_london_header_has_no_base_fee() {
        let encoded = canonical_header(&mainnet_genesis()).unwrap();
        assert_eq!(decode_fields(&encoded).len(), REQUIRED_FIELDS.len());
    }

    #[test]
    fn present_fields_keep_fixed_order_even_with_gaps() {
        let mut raw = mainnet_genesis();
        raw.0.remove("hash");
        raw.0.insert("excessBlobGas".to_owned(), json!("0x60000"));
        raw.0.insert("baseFeePerGas".to_owned(), json!("0x7"));

        let fields = decode_fields(&canonical_header(&raw).unwrap());

        assert_eq!(fields.len(), REQUIRED_FIELDS.len() + 2);
        assert_eq!(fields[15].as_ref(), &[0x07]);
        assert_eq!(fields[16].as_ref(), &[0x06, 0x00, 0x00]);
    }

    #[test]
    fn zero_valued_optional_field_is_still_appended() {
        let mut raw = mainnet_genesis();
        raw.0.remove("hash");
        raw.0.insert("baseFeePerGas".to_owned(), json!("0x0"));

        let fields = decode_fields(&canonical_header(&raw).unwrap());

        assert_eq!(fields.len(), REQUIRED_FIELDS.len() + 1);
        assert!(fields[15].is_empty());
    }

    #[test]
    fn null_optional_field_is_treated_as_absent() {
        let mut with_null = mainnet_genesis();
        with_null.0.insert("withdrawalsRoot".to_owned(), Value::Null);

        assert_eq!(
            canonical_header(&with_null).unwrap(),
            canonical_header(&mainnet_genesis()).unwrap()
        );
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let mut raw = mainnet_genesis();
        raw.0.remove("miner");

        assert_eq!(canonical_header(&raw), Err(HeaderError::MissingField("miner")));
    }

    #[test]
    fn invalid_hex_is_malformed() {
        let mut raw = mainnet_genesis();
        raw.0.insert("gasLimit".to_owned(), json!("0xzz"));

        assert!(matches!(
            canonical_header(&raw),
            Err(HeaderError::InvalidHex { field: "gasLimit", .. })
        ));
    }

    #[test]
    fn reported_hash_mismatch_is_detected() {
        let mut raw = mainnet_genesis();
        raw.0.insert("baseFeePerGas".to_owned(), json!("0x1"));

        assert!(matches!(canonical_header_checked(&raw), Err(HeaderError::HashMismatch { .. })));
    }
}
