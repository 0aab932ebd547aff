use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgentState {
    Operational,
    Warning,
    Critical,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub status: AgentState,
    pub current_mission: &'static str,
}

/// The fixed agent roster reported by `/api/agents/status`.
pub const AGENTS: [AgentStatus; 6] = [
    AgentStatus {
        id: "INTEL-01",
        name: "Intelligence Agent Alpha",
        status: AgentState::Operational,
        current_mission: "SIGINT Analysis",
    },
    AgentStatus {
        id: "TACTICAL-02",
        name: "Tactical Planning Agent",
        status: AgentState::Operational,
        current_mission: "Route Optimization",
    },
    AgentStatus {
        id: "LOGISTICS-03",
        name: "Logistics Coordination Agent",
        status: AgentState::Warning,
        current_mission: "Supply Chain Analysis",
    },
    AgentStatus {
        id: "COMMS-04",
        name: "Communications Agent",
        status: AgentState::Operational,
        current_mission: "Secure Channel Maintenance",
    },
    AgentStatus {
        id: "ANALYSIS-05",
        name: "Data Analysis Agent",
        status: AgentState::Operational,
        current_mission: "Pattern Recognition",
    },
    AgentStatus {
        id: "SECURITY-06",
        name: "Security Monitoring Agent",
        status: AgentState::Critical,
        current_mission: "Threat Detection",
    },
];

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub ai_processing: &'static str,
    pub secure_comms: &'static str,
    pub database: &'static str,
    pub active_agents: usize,
}
