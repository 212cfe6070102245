// ==========================================
// 地产数据导入系统 - 领域类型定义
// ==========================================
// 实体种类 + 行政区枚举
// 序列化格式: 与数据库存储一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 实体种类 (Entity Kind)
// ==========================================
// 决定一份 CSV 使用哪套列定义与校验规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Realtor, // 经纪人
    Listing, // 房源
}

impl EntityKind {
    /// 从命令行参数解析实体种类（不区分大小写）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "realtor" => Some(EntityKind::Realtor),
            "listing" => Some(EntityKind::Listing),
            _ => None,
        }
    }

    /// 转换为数据库表名
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Realtor => "realtor",
            EntityKind::Listing => "listing",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Realtor => write!(f, "realtor"),
            EntityKind::Listing => write!(f, "listing"),
        }
    }
}

// ==========================================
// 行政区 (District)
// ==========================================
// 香港 18 区，房源 district 列的合法取值全集
// 红线: 标签精确匹配（区分大小写），入库存标签文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum District {
    Islands,           // 离岛区
    KwaiTsing,         // 葵青区
    SaiKung,           // 西贡区
    TsuenWan,          // 荃湾区
    TuenMun,           // 屯门区
    YuenLong,          // 元朗区
    WongTaiSin,        // 黄大仙区
    ShaTin,            // 沙田区
    TaiPo,             // 大埔区
    KowloonCity,       // 九龙城区
    KwunTong,          // 观塘区
    ShamShuiPo,        // 深水埗区
    YauTsimMong,       // 油尖旺区
    CentralAndWestern, // 中西区
    Eastern,           // 东区
    Southern,          // 南区
    WanChai,           // 湾仔区
    North,             // 北区
}

/// 全部行政区（固定 18 个，顺序与源数据字典一致）
pub const ALL_DISTRICTS: [District; 18] = [
    District::Islands,
    District::KwaiTsing,
    District::SaiKung,
    District::TsuenWan,
    District::TuenMun,
    District::YuenLong,
    District::WongTaiSin,
    District::ShaTin,
    District::TaiPo,
    District::KowloonCity,
    District::KwunTong,
    District::ShamShuiPo,
    District::YauTsimMong,
    District::CentralAndWestern,
    District::Eastern,
    District::Southern,
    District::WanChai,
    District::North,
];

impl District {
    /// 从标签文本解析行政区（精确匹配，区分大小写）
    ///
    /// # 返回
    /// - Some(District): 标签合法
    /// - None: 不在 18 区列表内
    pub fn from_label(s: &str) -> Option<Self> {
        ALL_DISTRICTS.iter().copied().find(|d| d.label() == s)
    }

    /// 转换为数据库存储的标签文本
    pub fn label(&self) -> &'static str {
        match self {
            District::Islands => "Islands",
            District::KwaiTsing => "Kwai Tsing",
            District::SaiKung => "Sai Kung",
            District::TsuenWan => "Tsuen Wan",
            District::TuenMun => "Tuen Mun",
            District::YuenLong => "Yuen Long",
            District::WongTaiSin => "Wong Tai Sin",
            District::ShaTin => "Sha Tin",
            District::TaiPo => "Tai Po",
            District::KowloonCity => "Kowloon City",
            District::KwunTong => "Kwun Tong",
            District::ShamShuiPo => "Sham Shui Po",
            District::YauTsimMong => "Yau Tsim Mong",
            District::CentralAndWestern => "Central & Western",
            District::Eastern => "Eastern",
            District::Southern => "Southern",
            District::WanChai => "Wan Chai",
            District::North => "North",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_parse() {
        assert_eq!(EntityKind::parse("realtor"), Some(EntityKind::Realtor));
        assert_eq!(EntityKind::parse(" Listing "), Some(EntityKind::Listing));
        assert_eq!(EntityKind::parse("order"), None);
    }

    #[test]
    fn test_district_from_label_exact() {
        assert_eq!(District::from_label("Sha Tin"), Some(District::ShaTin));
        assert_eq!(
            District::from_label("Central & Western"),
            Some(District::CentralAndWestern)
        );
        // 区分大小写
        assert_eq!(District::from_label("sha tin"), None);
        assert_eq!(District::from_label("Mars"), None);
    }

    #[test]
    fn test_district_label_roundtrip() {
        for district in ALL_DISTRICTS {
            assert_eq!(District::from_label(district.label()), Some(district));
        }
    }
}
