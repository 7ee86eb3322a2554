//! the Modbus Plus network statistics block (55 registers, fixed field layout)

/**
    descriptor of one field of the statistics block.

    The partition is protocol-mandated and byte-granular: fields are cut out
    of the big-endian byte image of the 55 registers, so a field may cover the
    high or low half of a register alone (the single-byte counters of the
    original layout) or span up to four whole registers (the station bit maps).
*/
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatField {
    pub name: &'static str,
    /// field width in bytes of the register image
    pub width: usize,
}

const fn field(name: &'static str, width: usize) -> StatField {
    StatField { name, width }
}

/// the fixed partition of the statistics block, in wire order.
/// Field widths sum to the full 110-byte image of the 55 registers.
pub const FIELDS: [StatField; 47] = [
    field("node_type_id", 1),
    field("software_version_number", 1),
    field("network_address", 8),
    field("mac_state_variable", 8),
    field("peer_status_code", 2),
    field("token_pass_counter", 1),
    field("token_rotation_time", 8),
    field("program_master_token_failed", 1),
    field("data_master_token_failed", 1),
    field("program_master_token_owner", 1),
    field("data_master_token_owner", 1),
    field("program_slave_token_owner", 2),
    field("data_slave_token_owner", 1),
    field("data_slave_command_transfer", 1),
    field("program_slave_command_transfer", 1),
    field("program_master_rsp_transfer", 1),
    field("program_slave_auto_logout", 1),
    field("program_master_connect_status", 1),
    field("receive_buffer_dma_overrun", 1),
    field("pretransmit_deferral_error", 2),
    field("frame_size_error", 1),
    field("repeated_command_received", 1),
    field("receiver_alignment_error", 1),
    field("receiver_collision_abort_error", 1),
    field("active_station_bit_map", 8),
    field("bad_packet_length_error", 1),
    field("token_station_bit_map", 8),
    field("receive_link_address_error", 2),
    field("transmit_buffer_dma_underrun", 1),
    field("global_data_bit_map", 8),
    field("receive_buffer_use_bit_map", 8),
    field("bad_internal_packet_length", 1),
    field("bad_mac_function_code", 1),
    field("communication_retries", 2),
    field("communication_failed_error", 1),
    field("good_receive_packet", 1),
    field("unexpected_path_error", 1),
    field("exception_response_error", 1),
    field("forgotten_transaction_error", 2),
    field("unexpected_response_error", 1),
    field("receive_buffer_overrun", 1),
    field("transmit_buffer_overrun", 1),
    field("bad_config_error", 1),
    field("bad_link_address_error", 1),
    field("data_master_output_path", 2),
    field("data_slave_input_path", 1),
    field("program_master_output_path", 8),
];

/// number of 16-bit registers in the block
pub const REGISTER_COUNT: usize = 55;

/**
    the 55-register Modbus Plus performance and error counter table, served by
    the get-statistics sub-function of a Modbus Plus capable device.

    [Self::encode] is the raw register sequence for the wire; [Self::summary]
    and iteration expose the same data grouped by the fixed [FIELDS] partition
    so callers can aggregate per field without knowing the boundaries.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlusStatistics {
    registers: [u16; REGISTER_COUNT],
}

impl Default for PlusStatistics {
    fn default() -> Self {
        Self { registers: [0; REGISTER_COUNT] }
    }
}

impl PlusStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// the raw flat register sequence, as sent on the wire
    pub fn encode(&self) -> [u16; REGISTER_COUNT] {
        self.registers
    }

    /// zero every register
    pub fn reset(&mut self) {
        log::debug!("resetting modbus plus statistics");
        self.registers = [0; REGISTER_COUNT];
    }

    /// big-endian byte image of the registers, the granularity [FIELDS] cuts at
    fn byte_image(&self) -> Vec<u8> {
        self.registers
            .iter()
            .flat_map(|register| register.to_be_bytes())
            .collect()
    }

    /// field values grouped by the fixed partition, never flattened:
    /// a 1-byte field yields a 1-element group, an 8-byte field an 8-element group
    pub fn summary(&self) -> Vec<Vec<u8>> {
        self.iter().map(|(_, values)| values).collect()
    }

    /// `(descriptor, field bytes)` pairs in wire order, restartable
    pub fn iter(&self) -> impl Iterator<Item = (&'static StatField, Vec<u8>)> {
        let image = self.byte_image();
        let mut offset = 0;
        FIELDS.iter().map(move |descriptor| {
            let values = image[offset..offset + descriptor.width].to_vec();
            offset += descriptor.width;
            (descriptor, values)
        })
    }
}

impl<'a> IntoIterator for &'a PlusStatistics {
    type Item = (&'static StatField, Vec<u8>);
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}
