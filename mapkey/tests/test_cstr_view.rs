use anyhow::Result;
use mapkey::{CStrView, Error, MapKey, StringMap};
use std::{ffi::CString, sync::Arc};

fn needs_termination(sz: CStrView<'_>) -> usize {
    // What a C API would see: bytes up to and including the terminator.
    sz.as_c_str().to_bytes_with_nul().len()
}

#[test]
fn test_view_of_owned_c_string() -> Result<()> {
    let owned = CString::new("abc")?;
    let sz = CStrView::new(&owned)?;
    assert_eq!(sz, "abc");
    assert_eq!(needs_termination(sz), 4);
    Ok(())
}

#[test]
fn test_unterminated_input_fails_loudly() {
    let s = "abc";
    let err = CStrView::from_str_with_nul(&s[..1]).unwrap_err();
    assert_eq!(err, Error::Unterminated);
    assert_eq!(err.to_string(), "unterminated input to CStrView");
}

#[test]
fn test_serializes_as_string() -> Result<()> {
    let sz = CStrView::from_str_with_nul("abc\0")?;
    assert_eq!(serde_json::to_string(&sz)?, "\"abc\"");
    Ok(())
}

#[test]
fn test_view_keys_bind_into_string_map() -> Result<()> {
    let mut map: StringMap<u32> = StringMap::new();
    let key = CStrView::from_str_with_nul("key\0")?;
    assert!(MapKey::bind(&mut map, key).assign(1).inserted);
    assert_eq!(map.get(&*key), Some(&1));

    let shared: Arc<str> = Arc::from("key");
    let mk = MapKey::bind_str(&mut map, &shared);
    assert!(mk.found());
    assert_eq!(*mk.value_or_insert(5), 1);
    assert!(MapKey::bind_str(&mut map, &Arc::<str>::from("other")).assign(2).inserted);
    assert_eq!(map.len(), 2);
    Ok(())
}
