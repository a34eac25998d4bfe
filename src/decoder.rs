use crate::{errors::DecoderError, header::FieldMap};
use tracing::trace;

// parser-side ceiling on fields in a single section, independent of the
// destination map's own limit
const MAX_FIELDS: usize = 128;

/// Decodes one header section from `bytes` into `map`, zero-copy.
///
/// Returns `Ok(None)` while the section is still incomplete (no
/// terminating blank line yet), leaving `map` untouched. On success the
/// map's previous contents are replaced and `Ok(Some(consumed))` covers
/// the section including the terminating blank line. A section holding
/// more fields than the map's limit leaves it cleared.
pub fn decode_fields<'b>(
    bytes: &'b [u8],
    map: &mut FieldMap<'b>,
) -> Result<Option<usize>, DecoderError> {
    let mut headers = [httparse::EMPTY_HEADER; MAX_FIELDS];

    trace!(bytes = bytes.len(), "start");

    match httparse::parse_headers(bytes, &mut headers) {
        Ok(httparse::Status::Complete((consumed, parsed))) => {
            map.clear();
            for hdr in parsed {
                if !map.append(hdr.name, hdr.value) {
                    trace!(limit = map.limit(), "section exceeds field limit");
                    map.clear();
                    return Err(DecoderError::TooManyFields);
                }
            }
            trace!("complete({})", consumed);
            Ok(Some(consumed))
        }
        Ok(httparse::Status::Partial) => {
            trace!("partial");
            Ok(None)
        }
        Err(httparse::Error::TooManyHeaders) => Err(DecoderError::TooManyFields),
        Err(e) => Err(DecoderError::BadFormat(e.to_string())),
    }
}
