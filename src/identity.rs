//! device identification storage and its read-device-identification projections

use crate::control::ControlBlock;
use core::fmt;
use std::collections::BTreeMap;

/// object IDs of the device identification attributes, as addressed by the
/// read-device-identification request. This should be used instead of any
/// hardcoded ID value.
pub mod object_id {
    /// "Basic" category, mandatory
    pub const VENDOR_NAME: u8 = 0x00;
    pub const PRODUCT_CODE: u8 = 0x01;
    pub const MAJOR_MINOR_REVISION: u8 = 0x02;
    /// "Regular" category, optional
    pub const VENDOR_URL: u8 = 0x03;
    pub const PRODUCT_NAME: u8 = 0x04;
    pub const MODEL_NAME: u8 = 0x05;
    pub const USER_APPLICATION_NAME: u8 = 0x06;
    /// reserved, immutable once constructed
    pub const RESERVED: core::ops::RangeInclusive<u8> = 0x07..=0x08;
    /// start of the vendor-private extended range
    pub const PRIVATE: u8 = 0x10;
}

/**
    mapping of one-byte object IDs to device identification strings.

    IDs 0x00..=0x06 are the protocol-defined regular attributes, 0x07..=0x08
    are reserved and frozen to whatever the construction mapping supplied,
    0x09..=0x0f stay unused, and 0x10..=0xff are vendor-private values the
    application may read and write freely. Reading any unset ID yields the
    empty string.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeviceIdentity {
    objects: BTreeMap<u8, String>,
}

impl DeviceIdentity {
    /// seed the store from an initial mapping; this is the only moment the
    /// reserved IDs 0x07/0x08 can receive a value
    pub fn new<S: Into<String>>(initial: impl IntoIterator<Item = (u8, S)>) -> Self {
        Self {
            objects: initial.into_iter().map(|(id, value)| (id, value.into())).collect(),
        }
    }

    /// value of the given object ID, empty string when unset
    pub fn get(&self, id: u8) -> &str {
        self.objects.get(&id).map(String::as_str).unwrap_or("")
    }

    /// store a value, silently dropping writes to the reserved IDs
    pub fn set(&mut self, id: u8, value: impl Into<String>) {
        if object_id::RESERVED.contains(&id) {
            log::debug!("ignoring write to reserved identity object {:#04x}", id);
            return;
        }
        self.objects.insert(id, value.into());
    }

    /// the seven regular attributes 0x00..=0x06, reserved and private IDs excluded
    pub fn summary(&self) -> BTreeMap<u8, String> {
        (object_id::VENDOR_NAME..=object_id::USER_APPLICATION_NAME)
            .map(|id| (id, self.get(id).to_owned()))
            .collect()
    }

    /// set private (0x10 and above) IDs carrying a value
    pub fn private_objects(&self) -> impl Iterator<Item = (u8, &str)> {
        self.objects
            .range(object_id::PRIVATE..)
            .filter(|(_, value)| !value.is_empty())
            .map(|(&id, value)| (id, value.as_str()))
    }

    pub fn vendor_name(&self) -> &str {
        self.get(object_id::VENDOR_NAME)
    }
    pub fn product_code(&self) -> &str {
        self.get(object_id::PRODUCT_CODE)
    }
    pub fn major_minor_revision(&self) -> &str {
        self.get(object_id::MAJOR_MINOR_REVISION)
    }
    pub fn vendor_url(&self) -> &str {
        self.get(object_id::VENDOR_URL)
    }
    pub fn product_name(&self) -> &str {
        self.get(object_id::PRODUCT_NAME)
    }
    pub fn model_name(&self) -> &str {
        self.get(object_id::MODEL_NAME)
    }
    pub fn user_application_name(&self) -> &str {
        self.get(object_id::USER_APPLICATION_NAME)
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("DeviceIdentity")
    }
}

/**
    access categories of the read-device-identification request, with the MEI
    read-device-id code as discriminant.
*/
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DeviceInfoCategory {
    /// the mandatory attributes 0x00..=0x02
    Basic = 0x01,
    /// the regular attributes 0x00..=0x06
    Regular = 0x02,
    /// the vendor-private extended attributes
    Extended = 0x03,
    /// one single attribute, selected by the object ID
    Specific = 0x04,
}

/**
    project the control block's currently installed identity into the IDs the
    requested category covers.

    This reads live state and has no side effect. `object_id` selects the
    attribute for [DeviceInfoCategory::Specific] and the continuation start for
    [DeviceInfoCategory::Extended] (a stream access request resumes from the
    last object ID it was answered up to); the other categories cover a fixed
    ID range and ignore it.
*/
pub fn device_information(
    control: &ControlBlock,
    category: DeviceInfoCategory,
    object_id: u8,
) -> BTreeMap<u8, String> {
    let identity = control.identity();
    match category {
        DeviceInfoCategory::Specific => {
            [(object_id, identity.get(object_id).to_owned())].into()
        }
        DeviceInfoCategory::Basic => (object_id::VENDOR_NAME..=object_id::MAJOR_MINOR_REVISION)
            .map(|id| (id, identity.get(id).to_owned()))
            .collect(),
        DeviceInfoCategory::Regular => (object_id::VENDOR_NAME..=object_id::USER_APPLICATION_NAME)
            .map(|id| (id, identity.get(id).to_owned()))
            .collect(),
        DeviceInfoCategory::Extended => identity
            .private_objects()
            .filter(|&(id, _)| id >= object_id)
            .map(|(id, value)| (id, value.to_owned()))
            .collect(),
    }
}
