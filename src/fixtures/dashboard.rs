//! Dashboard overview data

use serde::Serialize;

use crate::types::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineStat {
    pub label: &'static str,
    pub value: &'static str,
}

/// One slice of the recruitment funnel chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunnelSlice {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyActivity {
    pub month: &'static str,
    pub applications: u32,
    pub interviews: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Application,
    Interview,
    Offer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub name: &'static str,
    pub position: &'static str,
    pub when: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingSlot {
    pub name: &'static str,
    pub position: &'static str,
    pub when: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub stats: Vec<HeadlineStat>,
    pub funnel: Vec<FunnelSlice>,
    pub monthly: Vec<MonthlyActivity>,
    pub recent_activity: Vec<Activity>,
    pub upcoming: Vec<UpcomingSlot>,
}

impl DashboardOverview {
    pub fn demo() -> Self {
        Self {
            stats: vec![
                HeadlineStat { label: "Open Positions", value: "12" },
                HeadlineStat { label: "Total Candidates", value: "254" },
                HeadlineStat { label: "Interviews This Week", value: "18" },
                HeadlineStat { label: "Time-to-Hire (Avg)", value: "14 days" },
            ],
            funnel: vec![
                FunnelSlice { name: "Applied", value: 54 },
                FunnelSlice { name: "Screened", value: 32 },
                FunnelSlice { name: "Interviewed", value: 18 },
                FunnelSlice { name: "Offered", value: 6 },
            ],
            monthly: vec![
                MonthlyActivity { month: "Jan", applications: 20, interviews: 10 },
                MonthlyActivity { month: "Feb", applications: 35, interviews: 15 },
                MonthlyActivity { month: "Mar", applications: 30, interviews: 20 },
                MonthlyActivity { month: "Apr", applications: 45, interviews: 25 },
                MonthlyActivity { month: "May", applications: 50, interviews: 30 },
                MonthlyActivity { month: "Jun", applications: 65, interviews: 35 },
            ],
            recent_activity: vec![
                Activity {
                    kind: ActivityKind::Application,
                    name: "John Smith",
                    position: "Frontend Developer",
                    when: "2 hours ago",
                    status: "new",
                },
                Activity {
                    kind: ActivityKind::Interview,
                    name: "Jane Doe",
                    position: "UX Designer",
                    when: "3 hours ago",
                    status: "completed",
                },
                Activity {
                    kind: ActivityKind::Offer,
                    name: "Robert Johnson",
                    position: "DevOps Engineer",
                    when: "5 hours ago",
                    status: "accepted",
                },
                Activity {
                    kind: ActivityKind::Application,
                    name: "Emily Wilson",
                    position: "Backend Developer",
                    when: "1 day ago",
                    status: "new",
                },
            ],
            upcoming: vec![
                UpcomingSlot {
                    name: "Michael Brown",
                    position: "Backend Developer",
                    when: "Today, 3:00 PM",
                    kind: "Technical",
                },
                UpcomingSlot {
                    name: "Sarah Johnson",
                    position: "Product Manager",
                    when: "Tomorrow, 11:00 AM",
                    kind: "Cultural",
                },
                UpcomingSlot {
                    name: "David Lee",
                    position: "Frontend Developer",
                    when: "Tomorrow, 2:30 PM",
                    kind: "Technical",
                },
            ],
        }
    }

    /// Whole-percent share of each funnel slice, rounded half away from zero.
    /// An empty funnel yields zero shares.
    pub fn funnel_shares(&self) -> Vec<(&'static str, u32)> {
        let total: u32 = self.funnel.iter().map(|slice| slice.value).sum();
        self.funnel
            .iter()
            .map(|slice| {
                let share = if total == 0 {
                    0
                } else {
                    (f64::from(slice.value) * 100.0 / f64::from(total)).round() as u32
                };
                (slice.name, share)
            })
            .collect()
    }

    /// Headline shown above the overview cards.
    pub fn greeting(identity: Option<&Identity>) -> String {
        match identity {
            Some(identity) => format!("Welcome back, {}", identity.display_name),
            None => "Welcome back".to_string(),
        }
    }
}
