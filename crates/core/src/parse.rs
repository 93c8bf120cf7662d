//! Parsing of the go-template projection back into rows.
//!
//! Header lines carry five fields, continuation lines three. Continuation
//! rows take namespace and pod from the row before them once the whole
//! batch has been parsed, so ordering must be preserved between the passes.

#![forbid(unsafe_code)]

use tracing::debug;

use crate::row::ImageRow;

/// Split raw kubectl output into rows without filling in pod identity.
pub fn parse_output(raw: &[u8]) -> Vec<ImageRow> {
    let text = String::from_utf8_lossy(raw);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        match fields.as_slice() {
            [container, image, policy] => rows.push(ImageRow::new("", "", container, image, policy)),
            [namespace, pod, container, image, policy] => {
                rows.push(ImageRow::new(namespace, pod, container, image, policy))
            }
            [_] => {}
            other => debug!(fields = other.len(), line = %line.trim(), "skipping malformed line"),
        }
    }
    rows
}

/// Give every row lacking a pod the namespace and pod of its predecessor.
/// A leading row without a pod is kept as is.
pub fn reconcile(rows: &mut [ImageRow]) {
    for i in 1..rows.len() {
        if rows[i].pod.is_empty() {
            let (namespace, pod) = (rows[i - 1].namespace.clone(), rows[i - 1].pod.clone());
            rows[i].namespace = namespace;
            rows[i].pod = pod;
        }
    }
}

/// `parse_output` followed by `reconcile`.
pub fn parse_and_reconcile(raw: &[u8]) -> Vec<ImageRow> {
    let mut rows = parse_output(raw);
    reconcile(&mut rows);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_continuation_shapes() {
        let rows = parse_output(b" dev , api-1 , web , nginx:1.21 , Always \n sidecar , busybox:1 , IfNotPresent \n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ImageRow::new("dev", "api-1", "web", "nginx:1.21", "Always"));
        assert_eq!(rows[1], ImageRow::new("", "", "sidecar", "busybox:1", "IfNotPresent"));
    }

    #[test]
    fn skips_blank_singleton_and_odd_lines() {
        let raw = b"\n   \nerror\na,b\na,b,c,d\na,b,c,d,e,f\nc,i,p\n";
        let rows = parse_output(raw);
        assert_eq!(rows, vec![ImageRow::new("", "", "c", "i", "p")]);
    }

    #[test]
    fn init_prefix_is_kept_in_container() {
        let rows = parse_output(b"  (init) setup , alpine:3 , Always \n");
        assert_eq!(rows[0].container, "(init) setup");
    }

    #[test]
    fn continuation_inherits_most_recent_header() {
        let raw = b"ns1,p1,a,img-a,Always\nb,img-b,Always\nc,img-c,Never\nns2,p2,d,img-d,Always\ne,img-e,Always\n";
        let rows = parse_and_reconcile(raw);
        let ids: Vec<(&str, &str)> = rows.iter().map(|r| (r.namespace.as_str(), r.pod.as_str())).collect();
        assert_eq!(ids, vec![("ns1", "p1"), ("ns1", "p1"), ("ns1", "p1"), ("ns2", "p2"), ("ns2", "p2")]);
    }

    #[test]
    fn leading_continuation_keeps_empty_identity() {
        let rows = parse_and_reconcile(b"orphan,img,Always\nns,p,c,img,Always\n");
        assert_eq!(rows[0].pod, "");
        assert_eq!(rows[0].namespace, "");
        assert_eq!(rows[1].pod, "p");
    }

    #[test]
    fn crlf_and_stderr_noise_tolerated() {
        let raw = b"ns,p,c,img,Always\r\nWarning: something happened\r\n";
        let rows = parse_and_reconcile(raw);
        assert_eq!(rows, vec![ImageRow::new("ns", "p", "c", "img", "Always")]);
    }
}
