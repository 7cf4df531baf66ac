// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bluetooth LE types for both the central and peripheral roles.
//
// Attribute values travel as arrays of byte values, never base64.

use std::collections::BTreeMap;

use ioskit_core::{Event, NativeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    Authorized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BluetoothState {
    Unknown,
    Resetting,
    Unsupported,
    Unauthorized,
    PoweredOff,
    PoweredOn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanMode {
    LowPower,
    Balanced,
    LowLatency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeripheralState {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WriteType {
    WithResponse,
    WithoutResponse,
}

/// ATT result code for a peripheral-role request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestResult {
    Success,
    InvalidHandle,
    ReadNotPermitted,
    WriteNotPermitted,
    InvalidPdu,
    InsufficientAuthentication,
    RequestNotSupported,
    InvalidOffset,
    InsufficientAuthorization,
    PrepareQueueFull,
    AttributeNotFound,
    AttributeNotLong,
    InsufficientEncryptionKeySize,
    InvalidAttributeValueLength,
    UnlikelyError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BluetoothEventType {
    StateChanged,
    PeripheralDiscovered,
    PeripheralConnected,
    PeripheralDisconnected,
    ServiceDiscovered,
    CharacteristicDiscovered,
    CharacteristicValueUpdated,
    CharacteristicSubscriptionChanged,
    DescriptorValueUpdated,
    CentralSubscribed,
    CentralUnsubscribed,
    ReadRequestReceived,
    WriteRequestReceived,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_uuids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_duplicates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_mode: Option<ScanMode>,
}

/// Company identifier → payload bytes.
pub type ManufacturerData = BTreeMap<u16, Vec<u8>>;

/// Service UUID → payload bytes.
pub type ServiceData = BTreeMap<String, Vec<u8>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peripheral {
    pub uuid: String,
    pub name: Option<String>,
    pub rssi: i32,
    pub is_connectable: bool,
    pub state: PeripheralState,
    #[serde(default)]
    pub services: Vec<String>,
    pub manufacturer_data: Option<ManufacturerData>,
    pub service_data: Option<ServiceData>,
    pub tx_power_level: Option<i32>,
    #[serde(default)]
    pub solicited_service_uuids: Vec<String>,
    #[serde(default)]
    pub overflow_service_uuids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub uuid: String,
    pub is_primary: bool,
    #[serde(default)]
    pub characteristics: Vec<String>,
    #[serde(default)]
    pub included_services: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicProperties {
    pub broadcast: bool,
    pub read: bool,
    pub write_without_response: bool,
    pub write: bool,
    pub notify: bool,
    pub indicate: bool,
    pub authenticated_signed_writes: bool,
    pub extended_properties: bool,
    pub notify_encryption_required: bool,
    pub indicate_encryption_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    pub uuid: String,
    pub service_uuid: String,
    pub properties: CharacteristicProperties,
    pub value: Option<Vec<u8>>,
    #[serde(default)]
    pub descriptors: Vec<String>,
    pub is_notifying: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub uuid: String,
    pub characteristic_uuid: String,
    pub value: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_response: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_connect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisingData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_uuids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_data: Option<ManufacturerData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_data: Option<ServiceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_power_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_connectable: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicPermissions {
    pub readable: bool,
    pub writeable: bool,
    pub read_encryption_required: bool,
    pub write_encryption_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeripheralDescriptor {
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeripheralCharacteristic {
    pub uuid: String,
    pub properties: CharacteristicProperties,
    pub permissions: CharacteristicPermissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<u8>>,
    pub descriptors: Vec<PeripheralDescriptor>,
}

/// A GATT service published while acting as a peripheral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeripheralService {
    pub uuid: String,
    pub is_primary: bool,
    pub characteristics: Vec<PeripheralCharacteristic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadRequest {
    pub central_uuid: String,
    pub characteristic_uuid: String,
    pub offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteRequest {
    pub central_uuid: String,
    pub characteristic_uuid: String,
    #[serde(default)]
    pub value: Vec<u8>,
    pub offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
    pub request_id: String,
    pub result: RequestResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub state: BluetoothState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeripheralLink {
    pub uuid: String,
    /// Set when the link dropped unexpectedly.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueUpdate {
    pub peripheral_uuid: String,
    pub characteristic_uuid: String,
    #[serde(default)]
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionChange {
    pub peripheral_uuid: String,
    pub characteristic_uuid: String,
    pub is_notifying: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentralSubscription {
    pub central_uuid: String,
    pub characteristic_uuid: String,
}

/// Payload of a Bluetooth event, keyed by [`BluetoothEventType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "data", rename_all = "camelCase")]
pub enum BluetoothEventData {
    StateChanged(StateChange),
    PeripheralDiscovered(Peripheral),
    PeripheralConnected(PeripheralLink),
    PeripheralDisconnected(PeripheralLink),
    ServiceDiscovered(Service),
    CharacteristicDiscovered(Characteristic),
    CharacteristicValueUpdated(ValueUpdate),
    CharacteristicSubscriptionChanged(SubscriptionChange),
    DescriptorValueUpdated(Descriptor),
    CentralSubscribed(CentralSubscription),
    CentralUnsubscribed(CentralSubscription),
    ReadRequestReceived(ReadRequest),
    WriteRequestReceived(WriteRequest),
    Error(NativeError),
}

impl BluetoothEventData {
    pub fn event_type(&self) -> BluetoothEventType {
        match self {
            Self::StateChanged(_) => BluetoothEventType::StateChanged,
            Self::PeripheralDiscovered(_) => BluetoothEventType::PeripheralDiscovered,
            Self::PeripheralConnected(_) => BluetoothEventType::PeripheralConnected,
            Self::PeripheralDisconnected(_) => BluetoothEventType::PeripheralDisconnected,
            Self::ServiceDiscovered(_) => BluetoothEventType::ServiceDiscovered,
            Self::CharacteristicDiscovered(_) => BluetoothEventType::CharacteristicDiscovered,
            Self::CharacteristicValueUpdated(_) => BluetoothEventType::CharacteristicValueUpdated,
            Self::CharacteristicSubscriptionChanged(_) => {
                BluetoothEventType::CharacteristicSubscriptionChanged
            }
            Self::DescriptorValueUpdated(_) => BluetoothEventType::DescriptorValueUpdated,
            Self::CentralSubscribed(_) => BluetoothEventType::CentralSubscribed,
            Self::CentralUnsubscribed(_) => BluetoothEventType::CentralUnsubscribed,
            Self::ReadRequestReceived(_) => BluetoothEventType::ReadRequestReceived,
            Self::WriteRequestReceived(_) => BluetoothEventType::WriteRequestReceived,
            Self::Error(_) => BluetoothEventType::Error,
        }
    }
}

pub type BluetoothEvent = Event<BluetoothEventData>;
