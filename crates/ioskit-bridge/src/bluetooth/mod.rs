// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bluetooth: Core Bluetooth central scanning/GATT client and peripheral
// advertising/GATT server.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-bluetooth", 2);

pub const COMMANDS: &[&str] = &[
    "request_authorization",
    "get_authorization_status",
    "is_bluetooth_enabled",
    "start_central_scan",
    "stop_central_scan",
    "connect_peripheral",
    "disconnect_peripheral",
    "get_connected_peripherals",
    "get_discovered_peripherals",
    "discover_services",
    "discover_characteristics",
    "read_characteristic",
    "write_characteristic",
    "subscribe_to_characteristic",
    "unsubscribe_from_characteristic",
    "read_descriptor",
    "write_descriptor",
    "get_peripheral_rssi",
    "start_peripheral_advertising",
    "stop_peripheral_advertising",
    "add_service",
    "remove_service",
    "remove_all_services",
    "respond_to_request",
    "update_characteristic_value",
    "get_maximum_write_length",
    "set_notify_value",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-bluetooth",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Bluetooth {
    client: PluginClient,
}

impl Bluetooth {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn request_authorization(&self) -> Result<AuthorizationStatus> {
        self.client.invoke("request_authorization", Args::new()).await
    }

    pub async fn get_authorization_status(&self) -> Result<AuthorizationStatus> {
        self.client
            .invoke("get_authorization_status", Args::new())
            .await
    }

    pub async fn is_bluetooth_enabled(&self) -> Result<bool> {
        self.client.invoke("is_bluetooth_enabled", Args::new()).await
    }

    // -- Central role ---------------------------------------------------------

    pub async fn start_central_scan(&self, options: Option<&ScanOptions>) -> Result<()> {
        let args = Args::new().maybe("options", options)?;
        self.client.send("start_central_scan", args).await
    }

    pub async fn stop_central_scan(&self) -> Result<()> {
        self.client.send("stop_central_scan", Args::new()).await
    }

    pub async fn connect_peripheral(
        &self,
        uuid: &str,
        options: Option<&ConnectionOptions>,
    ) -> Result<()> {
        let args = Args::new().with("uuid", uuid)?.maybe("options", options)?;
        self.client.send("connect_peripheral", args).await
    }

    pub async fn disconnect_peripheral(&self, uuid: &str) -> Result<()> {
        let args = Args::new().with("uuid", uuid)?;
        self.client.send("disconnect_peripheral", args).await
    }

    pub async fn get_connected_peripherals(&self) -> Result<Vec<Peripheral>> {
        self.client
            .invoke("get_connected_peripherals", Args::new())
            .await
    }

    pub async fn get_discovered_peripherals(&self) -> Result<Vec<Peripheral>> {
        self.client
            .invoke("get_discovered_peripherals", Args::new())
            .await
    }

    pub async fn discover_services(
        &self,
        peripheral_uuid: &str,
        service_uuids: Option<&[String]>,
    ) -> Result<Vec<Service>> {
        let args = Args::new()
            .with("peripheralUuid", peripheral_uuid)?
            .maybe("serviceUuids", service_uuids)?;
        self.client.invoke("discover_services", args).await
    }

    pub async fn discover_characteristics(
        &self,
        peripheral_uuid: &str,
        service_uuid: &str,
        characteristic_uuids: Option<&[String]>,
    ) -> Result<Vec<Characteristic>> {
        let args = Args::new()
            .with("peripheralUuid", peripheral_uuid)?
            .with("serviceUuid", service_uuid)?
            .maybe("characteristicUuids", characteristic_uuids)?;
        self.client.invoke("discover_characteristics", args).await
    }

    pub async fn read_characteristic(
        &self,
        peripheral_uuid: &str,
        characteristic_uuid: &str,
    ) -> Result<Vec<u8>> {
        let args = Args::new()
            .with("peripheralUuid", peripheral_uuid)?
            .with("characteristicUuid", characteristic_uuid)?;
        self.client.invoke("read_characteristic", args).await
    }

    pub async fn write_characteristic(
        &self,
        peripheral_uuid: &str,
        characteristic_uuid: &str,
        value: &[u8],
        options: Option<&WriteOptions>,
    ) -> Result<()> {
        let args = Args::new()
            .with("peripheralUuid", peripheral_uuid)?
            .with("characteristicUuid", characteristic_uuid)?
            .with("value", value)?
            .maybe("options", options)?;
        self.client.send("write_characteristic", args).await
    }

    pub async fn subscribe_to_characteristic(
        &self,
        peripheral_uuid: &str,
        characteristic_uuid: &str,
    ) -> Result<()> {
        let args = Args::new()
            .with("peripheralUuid", peripheral_uuid)?
            .with("characteristicUuid", characteristic_uuid)?;
        self.client.send("subscribe_to_characteristic", args).await
    }

    pub async fn unsubscribe_from_characteristic(
        &self,
        peripheral_uuid: &str,
        characteristic_uuid: &str,
    ) -> Result<()> {
        let args = Args::new()
            .with("peripheralUuid", peripheral_uuid)?
            .with("characteristicUuid", characteristic_uuid)?;
        self.client
            .send("unsubscribe_from_characteristic", args)
            .await
    }

    pub async fn read_descriptor(
        &self,
        peripheral_uuid: &str,
        descriptor_uuid: &str,
    ) -> Result<Vec<u8>> {
        let args = Args::new()
            .with("peripheralUuid", peripheral_uuid)?
            .with("descriptorUuid", descriptor_uuid)?;
        self.client.invoke("read_descriptor", args).await
    }

    pub async fn write_descriptor(
        &self,
        peripheral_uuid: &str,
        descriptor_uuid: &str,
        value: &[u8],
    ) -> Result<()> {
        let args = Args::new()
            .with("peripheralUuid", peripheral_uuid)?
            .with("descriptorUuid", descriptor_uuid)?
            .with("value", value)?;
        self.client.send("write_descriptor", args).await
    }

    /// Signal strength in dBm.
    pub async fn get_peripheral_rssi(&self, peripheral_uuid: &str) -> Result<i32> {
        let args = Args::new().with("peripheralUuid", peripheral_uuid)?;
        self.client.invoke("get_peripheral_rssi", args).await
    }

    pub async fn get_maximum_write_length(
        &self,
        peripheral_uuid: &str,
        write_type: WriteType,
    ) -> Result<u32> {
        let args = Args::new()
            .with("peripheralUuid", peripheral_uuid)?
            .with("writeType", &write_type)?;
        self.client.invoke("get_maximum_write_length", args).await
    }

    // -- Peripheral role ------------------------------------------------------

    pub async fn start_peripheral_advertising(&self, advertising_data: &AdvertisingData) -> Result<()> {
        let args = Args::new().with("advertisingData", advertising_data)?;
        self.client.send("start_peripheral_advertising", args).await
    }

    pub async fn stop_peripheral_advertising(&self) -> Result<()> {
        self.client
            .send("stop_peripheral_advertising", Args::new())
            .await
    }

    pub async fn add_service(&self, service: &PeripheralService) -> Result<()> {
        let args = Args::new().with("service", service)?;
        self.client.send("add_service", args).await
    }

    pub async fn remove_service(&self, service_uuid: &str) -> Result<()> {
        let args = Args::new().with("serviceUuid", service_uuid)?;
        self.client.send("remove_service", args).await
    }

    pub async fn remove_all_services(&self) -> Result<()> {
        self.client.send("remove_all_services", Args::new()).await
    }

    pub async fn respond_to_request(&self, response: &RequestResponse) -> Result<()> {
        let args = Args::new().with("response", response)?;
        self.client.send("respond_to_request", args).await
    }

    /// Push a new value to subscribed centrals, or only to `central_uuids`.
    pub async fn update_characteristic_value(
        &self,
        characteristic_uuid: &str,
        value: &[u8],
        central_uuids: Option<&[String]>,
    ) -> Result<()> {
        let args = Args::new()
            .with("characteristicUuid", characteristic_uuid)?
            .with("value", value)?
            .maybe("centralUuids", central_uuids)?;
        self.client.send("update_characteristic_value", args).await
    }

    pub async fn set_notify_value(&self, characteristic_uuid: &str, enabled: bool) -> Result<()> {
        let args = Args::new()
            .with("characteristicUuid", characteristic_uuid)?
            .with("enabled", &enabled)?;
        self.client.send("set_notify_value", args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ioskit_core::mock::MockTransport;
    use ioskit_core::{decode_event, BridgeError};
    use serde_json::json;

    use crate::testing::assert_wire_table;

    fn setup() -> (Arc<MockTransport>, Bluetooth) {
        let mock = Arc::new(MockTransport::new());
        (mock.clone(), Bluetooth::new(mock))
    }

    #[tokio::test]
    async fn write_characteristic_sends_byte_array() {
        let (mock, bluetooth) = setup();

        bluetooth
            .write_characteristic("P-1", "2A37", &[0x01, 0xff], None)
            .await
            .unwrap();

        let call = mock.single().await;
        assert_eq!(call.command, "plugin:ios-bluetooth-v2|write_characteristic");
        assert_eq!(
            call.args,
            json!({ "peripheralUuid": "P-1", "characteristicUuid": "2A37", "value": [1, 255] })
        );
    }

    #[tokio::test]
    async fn discover_services_filters_when_given() {
        let (mock, bluetooth) = setup();
        mock.resolve(
            "plugin:ios-bluetooth-v2|discover_services",
            json!([{ "uuid": "180D", "isPrimary": true, "characteristics": ["2A37"], "includedServices": [] }]),
        )
        .await;

        let services = bluetooth
            .discover_services("P-1", Some(&["180D".to_owned()]))
            .await
            .unwrap();

        assert_eq!(services[0].characteristics, vec!["2A37"]);
        assert_eq!(
            mock.single().await.args,
            json!({ "peripheralUuid": "P-1", "serviceUuids": ["180D"] })
        );
    }

    #[tokio::test]
    async fn scan_without_options_sends_empty_object() {
        let (mock, bluetooth) = setup();

        bluetooth.start_central_scan(None).await.unwrap();

        assert_eq!(mock.single().await.args, json!({}));
    }

    #[tokio::test]
    async fn discovered_peripheral_tolerates_sparse_record() {
        let (mock, bluetooth) = setup();
        mock.resolve(
            "plugin:ios-bluetooth-v2|get_discovered_peripherals",
            json!([{
                "uuid": "P-1",
                "name": null,
                "rssi": -61,
                "isConnectable": true,
                "state": "disconnected",
                "services": [],
                "manufacturerData": { "76": [2, 21] }
            }]),
        )
        .await;

        let peripherals = bluetooth.get_discovered_peripherals().await.unwrap();

        assert_eq!(peripherals[0].rssi, -61);
        assert_eq!(peripherals[0].name, None);
        assert_eq!(peripherals[0].manufacturer_data.as_ref().unwrap()[&76], vec![2, 21]);
        assert!(peripherals[0].solicited_service_uuids.is_empty());
    }

    #[tokio::test]
    async fn respond_to_request_wraps_response() {
        let (mock, bluetooth) = setup();
        let response = RequestResponse {
            request_id: "req-9".into(),
            result: RequestResult::ReadNotPermitted,
            value: None,
        };

        bluetooth.respond_to_request(&response).await.unwrap();

        assert_eq!(
            mock.single().await.args,
            json!({ "response": { "requestId": "req-9", "result": "readNotPermitted" } })
        );
    }

    #[tokio::test]
    async fn rejection_keeps_native_payload() {
        let (mock, bluetooth) = setup();
        mock.reject(
            "plugin:ios-bluetooth-v2|connect_peripheral",
            json!("Peripheral not found"),
        )
        .await;

        let err = bluetooth.connect_peripheral("missing", None).await.unwrap_err();

        match err {
            BridgeError::Rejected(native) => assert_eq!(native.payload(), &json!("Peripheral not found")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn value_update_event_decodes() {
        let event: BluetoothEvent = decode_event(json!({
            "eventType": "characteristicValueUpdated",
            "timestamp": "2024-05-01T10:00:00Z",
            "data": { "peripheralUuid": "P-1", "characteristicUuid": "2A37", "value": [6, 72] }
        }))
        .unwrap();

        match event.payload {
            BluetoothEventData::CharacteristicValueUpdated(update) => {
                assert_eq!(update.value, vec![6, 72])
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn disconnect_event_carries_optional_error() {
        let event: BluetoothEvent = decode_event(json!({
            "eventType": "peripheralDisconnected",
            "data": { "uuid": "P-1", "error": null }
        }))
        .unwrap();
        assert_eq!(
            event.payload,
            BluetoothEventData::PeripheralDisconnected(PeripheralLink {
                uuid: "P-1".into(),
                error: None
            })
        );
    }

    #[tokio::test]
    async fn every_command_reaches_the_wire() {
        let (mock, bt) = setup();
        let filter = vec!["180D".to_owned()];
        let scan = ScanOptions {
            allow_duplicates: Some(false),
            ..ScanOptions::default()
        };
        let connect = ConnectionOptions {
            timeout_ms: Some(5000),
            ..ConnectionOptions::default()
        };
        let write = WriteOptions {
            with_response: Some(true),
        };
        let advertising = AdvertisingData {
            local_name: Some("ioskit".to_owned()),
            ..AdvertisingData::default()
        };
        let service = PeripheralService {
            uuid: "180D".to_owned(),
            is_primary: true,
            characteristics: vec![],
        };
        let response = RequestResponse {
            request_id: "req-1".to_owned(),
            result: RequestResult::Success,
            value: Some(vec![7]),
        };

        let _ = bt.request_authorization().await;
        let _ = bt.get_authorization_status().await;
        let _ = bt.is_bluetooth_enabled().await;
        let _ = bt.start_central_scan(Some(&scan)).await;
        let _ = bt.stop_central_scan().await;
        let _ = bt.connect_peripheral("p-1", Some(&connect)).await;
        let _ = bt.disconnect_peripheral("p-1").await;
        let _ = bt.get_connected_peripherals().await;
        let _ = bt.get_discovered_peripherals().await;
        let _ = bt.discover_services("p-1", Some(&filter)).await;
        let _ = bt.discover_characteristics("p-1", "180D", None).await;
        let _ = bt.read_characteristic("p-1", "2A37").await;
        let _ = bt.write_characteristic("p-1", "2A39", &[1, 2], Some(&write)).await;
        let _ = bt.subscribe_to_characteristic("p-1", "2A37").await;
        let _ = bt.unsubscribe_from_characteristic("p-1", "2A37").await;
        let _ = bt.read_descriptor("p-1", "2902").await;
        let _ = bt.write_descriptor("p-1", "2902", &[1, 0]).await;
        let _ = bt.get_peripheral_rssi("p-1").await;
        let _ = bt.get_maximum_write_length("p-1", WriteType::WithoutResponse).await;
        let _ = bt.start_peripheral_advertising(&advertising).await;
        let _ = bt.stop_peripheral_advertising().await;
        let _ = bt.add_service(&service).await;
        let _ = bt.remove_service("180D").await;
        let _ = bt.remove_all_services().await;
        let _ = bt.respond_to_request(&response).await;
        let _ = bt.update_characteristic_value("2A37", &[60], None).await;
        let _ = bt.set_notify_value("2A37", true).await;

        assert_wire_table(
            &mock,
            &MANIFEST,
            &[
                ("request_authorization", json!({})),
                ("get_authorization_status", json!({})),
                ("is_bluetooth_enabled", json!({})),
                ("start_central_scan", json!({ "options": { "allowDuplicates": false } })),
                ("stop_central_scan", json!({})),
                ("connect_peripheral", json!({ "uuid": "p-1", "options": { "timeoutMs": 5000 } })),
                ("disconnect_peripheral", json!({ "uuid": "p-1" })),
                ("get_connected_peripherals", json!({})),
                ("get_discovered_peripherals", json!({})),
                ("discover_services", json!({ "peripheralUuid": "p-1", "serviceUuids": ["180D"] })),
                ("discover_characteristics", json!({ "peripheralUuid": "p-1", "serviceUuid": "180D" })),
                ("read_characteristic", json!({ "peripheralUuid": "p-1", "characteristicUuid": "2A37" })),
                (
                    "write_characteristic",
                    json!({
                        "peripheralUuid": "p-1",
                        "characteristicUuid": "2A39",
                        "value": [1, 2],
                        "options": { "withResponse": true }
                    }),
                ),
                ("subscribe_to_characteristic", json!({ "peripheralUuid": "p-1", "characteristicUuid": "2A37" })),
                ("unsubscribe_from_characteristic", json!({ "peripheralUuid": "p-1", "characteristicUuid": "2A37" })),
                ("read_descriptor", json!({ "peripheralUuid": "p-1", "descriptorUuid": "2902" })),
                (
                    "write_descriptor",
                    json!({ "peripheralUuid": "p-1", "descriptorUuid": "2902", "value": [1, 0] }),
                ),
                ("get_peripheral_rssi", json!({ "peripheralUuid": "p-1" })),
                ("get_maximum_write_length", json!({ "peripheralUuid": "p-1", "writeType": "withoutResponse" })),
                ("start_peripheral_advertising", json!({ "advertisingData": { "localName": "ioskit" } })),
                ("stop_peripheral_advertising", json!({})),
                (
                    "add_service",
                    json!({ "service": { "uuid": "180D", "isPrimary": true, "characteristics": [] } }),
                ),
                ("remove_service", json!({ "serviceUuid": "180D" })),
                ("remove_all_services", json!({})),
                (
                    "respond_to_request",
                    json!({ "response": { "requestId": "req-1", "result": "success", "value": [7] } }),
                ),
                ("update_characteristic_value", json!({ "characteristicUuid": "2A37", "value": [60] })),
                ("set_notify_value", json!({ "characteristicUuid": "2A37", "enabled": true })),
            ],
        )
        .await;
    }
}
